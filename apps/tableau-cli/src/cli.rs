//! Command-line interface for `modalc`, the modal-logic K decision
//! procedure tool.
//!
//! # Architecture
//!
//! The CLI is built on [`clap`] with derive macros. Each [`Commands`]
//! variant maps to a handler function; the handlers call into
//! [`tableau_system`] for parsing and decision, and [`crate::watchdog`]
//! for the `--timeout-ms` watchdog.
//!
//! # Examples
//!
//! ```bash
//! modalc check "[]p -> p"
//! modalc witness "<>p & []~p" --json
//! ```

use std::io::{self, Read};

use clap::{Parser, Subcommand};
use log::LevelFilter;

use tableau_base::FormulaArena;
use tableau_system::{decide_with, is_satisfiable_with, is_valid_with, DecisionOutcome, ExpansionConfig};

use crate::watchdog::run_with_timeout;

/// Command-line interface for the modal-logic K decision tool.
#[derive(Parser)]
#[command(name = "modalc")]
#[command(about = "Decide satisfiability and validity of modal logic K formulas", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Shared depth-guard and watchdog knobs for both subcommands.
#[derive(clap::Args, Clone)]
pub struct DecisionArgs {
    /// The formula to decide. Read from stdin if omitted.
    pub formula: Option<String>,

    /// Depth guard: maximum number of rule firings before giving up.
    #[arg(long, default_value_t = 100_000)]
    pub max_expansions: usize,

    /// Depth guard: maximum world-prefix nesting depth before giving up.
    #[arg(long, default_value_t = 64)]
    pub max_prefix_length: usize,

    /// Abort and report a timeout if the decision takes longer than this.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether a formula is satisfiable and/or valid.
    Check(DecisionArgs),

    /// Print the full decision, including the proof tree and a witness
    /// (satisfying valuation / accessibility relation) when available.
    Witness {
        #[command(flatten)]
        args: DecisionArgs,

        /// Emit the decision as JSON instead of a human-readable summary.
        #[arg(long)]
        json: bool,
    },
}

pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check(args) => cmd_check(args),
        Commands::Witness { args, json } => cmd_witness(args, json),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn read_formula(formula: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match formula {
        Some(f) => Ok(f),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn config_from(args: &DecisionArgs) -> ExpansionConfig {
    ExpansionConfig {
        max_expansions: args.max_expansions,
        max_prefix_length: args.max_prefix_length,
    }
}

fn cmd_check(args: DecisionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_formula(args.formula.clone())?;
    let timeout_ms = args.timeout_ms;
    let config = config_from(&args);

    let outcome = run_with_timeout(timeout_ms, move || -> Result<(bool, bool), String> {
        let arena = FormulaArena::new();
        let formula = tableau_base::parse(&source, &arena).map_err(|e| e.display_with_source(&source))?;
        arena.with_interner(|interner| {
            let sat = match is_satisfiable_with(formula, interner, &config) {
                DecisionOutcome::Decided(v) => v,
                DecisionOutcome::Inconclusive { reason } => return Err(reason),
            };
            let valid = match is_valid_with(formula, interner, &config) {
                DecisionOutcome::Decided(v) => v,
                DecisionOutcome::Inconclusive { reason } => return Err(reason),
            };
            Ok((sat, valid))
        })
    })
    .map_err(|_| format!("decision timed out after {timeout_ms}ms"))??;

    let (satisfiable, valid) = outcome;
    println!("satisfiable: {satisfiable}");
    println!("valid: {valid}");
    Ok(())
}

fn cmd_witness(args: DecisionArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_formula(args.formula.clone())?;
    let timeout_ms = args.timeout_ms;
    let config = config_from(&args);

    let decision = run_with_timeout(timeout_ms, move || -> Result<tableau_system::Decision, String> {
        let arena = FormulaArena::new();
        let formula = tableau_base::parse(&source, &arena).map_err(|e| e.display_with_source(&source))?;
        arena.with_interner(|interner| match decide_with(formula, interner, &config) {
            DecisionOutcome::Decided(d) => Ok(d),
            DecisionOutcome::Inconclusive { reason } => Err(reason),
        })
    })
    .map_err(|_| format!("decision timed out after {timeout_ms}ms"))??;

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("satisfiable: {}", decision.satisfiable);
        println!("valid: {}", decision.valid);
        println!("proof tree nodes: {}", decision.tree.nodes.len());
        println!("accessibility edges: {}", decision.accessibility.edges.len());
        for valuation in &decision.valuations {
            println!(
                "world {}: true={:?} false={:?}",
                valuation.world, valuation.true_atoms, valuation.false_atoms
            );
        }
    }

    Ok(())
}
