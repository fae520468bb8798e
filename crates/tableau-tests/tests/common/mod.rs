//! Shared test helpers: parse a formula and decide it in one call, hiding
//! the arena/interner plumbing each test would otherwise repeat.

use tableau_base::{Formula, FormulaArena};
use tableau_system::{decide, is_satisfiable, is_valid, Decision, DecisionOutcome};

pub fn parse_owned<'a>(source: &str, arena: &'a FormulaArena) -> &'a Formula<'a> {
    tableau_base::parse(source, arena).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

pub fn check(source: &str) -> (bool, bool) {
    let arena = FormulaArena::new();
    let formula = parse_owned(source, &arena);
    arena.with_interner(|interner| {
        let sat = match is_satisfiable(formula, interner) {
            DecisionOutcome::Decided(v) => v,
            DecisionOutcome::Inconclusive { reason } => panic!("inconclusive: {reason}"),
        };
        let valid = match is_valid(formula, interner) {
            DecisionOutcome::Decided(v) => v,
            DecisionOutcome::Inconclusive { reason } => panic!("inconclusive: {reason}"),
        };
        (sat, valid)
    })
}

pub fn decide_owned(source: &str) -> Decision {
    let arena = FormulaArena::new();
    let formula = parse_owned(source, &arena);
    arena.with_interner(|interner| match decide(formula, interner) {
        DecisionOutcome::Decided(d) => d,
        DecisionOutcome::Inconclusive { reason } => panic!("inconclusive: {reason}"),
    })
}
