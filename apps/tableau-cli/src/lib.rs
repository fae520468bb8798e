//! `modalc` - a command-line decision procedure for modal logic K.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `modalc check` | Report satisfiability and validity of a formula |
//! | `modalc witness` | Print the full decision, proof tree, and witness |
//!
//! # Module Structure
//!
//! - [`cli`] - command-line argument parsing and dispatch
//! - [`watchdog`] - the `--timeout-ms` host-level timeout

pub mod cli;
pub mod watchdog;

/// Entry point for the CLI. See [`cli::run_cli`] for details.
pub use cli::run_cli;
