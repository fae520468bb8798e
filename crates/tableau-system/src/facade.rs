//! The decision facade: `is_satisfiable`, `is_valid`, and `decide`, each
//! seeding and running one tableau per §4.7's sign convention (`T` to try
//! to satisfy, `F` to try to refute).

use log::debug;
use serde::Serialize;

use tableau_base::{Formula, Interner};
use tableau_engine::{run, ExpansionConfig, ExpansionOutcome};
use tableau_kernel::{PrefixStore, Sign, Spf};

use crate::witness::{valuations, WitnessGraph, WitnessTree};

/// The outcome of a decision call: either a definite answer, or an honest
/// "the depth guard tripped" admission (never expected on K, which is
/// decidable — a guard trip signals a bug, not a genuine indeterminacy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionOutcome<T> {
    Decided(T),
    Inconclusive { reason: String },
}

impl<T> DecisionOutcome<T> {
    pub fn is_decided(&self) -> bool {
        matches!(self, DecisionOutcome::Decided(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub valid: bool,
    pub satisfiable: bool,
    pub tree: WitnessTree,
    pub accessibility: WitnessGraph,
    pub valuations: Vec<crate::witness::WorldValuation>,
}

fn run_tableau<'a>(
    sign: Sign,
    formula: &'a Formula<'a>,
    interner: &Interner,
    config: &ExpansionConfig,
) -> DecisionOutcome<ExpansionOutcome<'a>> {
    let (prefixes, root) = PrefixStore::root();
    let seed = Spf::new(sign, root, formula);
    let (outcome, _tree) = run(seed, prefixes, interner, config);
    match outcome {
        ExpansionOutcome::Inconclusive { reason } => DecisionOutcome::Inconclusive { reason },
        saturated => DecisionOutcome::Decided(saturated),
    }
}

/// Build a tableau seeded `⟨T, "1", φ⟩`; satisfiable iff some branch
/// saturates open.
pub fn is_satisfiable(formula: &Formula, interner: &Interner) -> DecisionOutcome<bool> {
    is_satisfiable_with(formula, interner, &ExpansionConfig::default())
}

pub fn is_satisfiable_with(
    formula: &Formula,
    interner: &Interner,
    config: &ExpansionConfig,
) -> DecisionOutcome<bool> {
    match run_tableau(Sign::T, formula, interner, config) {
        DecisionOutcome::Inconclusive { reason } => DecisionOutcome::Inconclusive { reason },
        DecisionOutcome::Decided(ExpansionOutcome::Saturated { open_branches }) => {
            let satisfiable = !open_branches.is_empty();
            debug!("is_satisfiable -> {satisfiable}");
            DecisionOutcome::Decided(satisfiable)
        }
        DecisionOutcome::Decided(ExpansionOutcome::Inconclusive { reason }) => {
            DecisionOutcome::Inconclusive { reason }
        }
    }
}

/// Build a tableau seeded `⟨F, "1", φ⟩`; valid iff every branch closes.
pub fn is_valid(formula: &Formula, interner: &Interner) -> DecisionOutcome<bool> {
    is_valid_with(formula, interner, &ExpansionConfig::default())
}

pub fn is_valid_with(
    formula: &Formula,
    interner: &Interner,
    config: &ExpansionConfig,
) -> DecisionOutcome<bool> {
    match run_tableau(Sign::F, formula, interner, config) {
        DecisionOutcome::Inconclusive { reason } => DecisionOutcome::Inconclusive { reason },
        DecisionOutcome::Decided(ExpansionOutcome::Saturated { open_branches }) => {
            let valid = open_branches.is_empty();
            debug!("is_valid -> {valid}");
            DecisionOutcome::Decided(valid)
        }
        DecisionOutcome::Decided(ExpansionOutcome::Inconclusive { reason }) => {
            DecisionOutcome::Inconclusive { reason }
        }
    }
}

/// Run both tableaux (satisfiability and validity-refutation) and report
/// the pair plus the witness from the satisfiability run, the more
/// informative one when `φ` is satisfiable but not valid.
pub fn decide(formula: &Formula, interner: &Interner) -> DecisionOutcome<Decision> {
    decide_with(formula, interner, &ExpansionConfig::default())
}

pub fn decide_with(
    formula: &Formula,
    interner: &Interner,
    config: &ExpansionConfig,
) -> DecisionOutcome<Decision> {
    let (sat_prefixes, sat_root) = PrefixStore::root();
    let sat_seed = Spf::new(Sign::T, sat_root, formula);
    let (sat_outcome, sat_tree) = run(sat_seed, sat_prefixes, interner, config);

    let ExpansionOutcome::Saturated {
        open_branches: sat_branches,
    } = sat_outcome
    else {
        let ExpansionOutcome::Inconclusive { reason } = sat_outcome else {
            unreachable!()
        };
        return DecisionOutcome::Inconclusive { reason };
    };

    let (val_prefixes, val_root) = PrefixStore::root();
    let val_seed = Spf::new(Sign::F, val_root, formula);
    let (val_outcome, _val_tree) = run(val_seed, val_prefixes, interner, config);

    let ExpansionOutcome::Saturated {
        open_branches: val_branches,
    } = val_outcome
    else {
        let ExpansionOutcome::Inconclusive { reason } = val_outcome else {
            unreachable!()
        };
        return DecisionOutcome::Inconclusive { reason };
    };

    let satisfiable = !sat_branches.is_empty();
    let valid = val_branches.is_empty();

    let (tree, accessibility, world_valuations) = match sat_branches.first() {
        Some(branch) => (
            WitnessTree::from(&sat_tree),
            WitnessGraph::from_branch(branch),
            valuations(branch, interner),
        ),
        None => (WitnessTree::empty(), WitnessGraph::default(), Vec::new()),
    };

    debug!("decide -> satisfiable={satisfiable} valid={valid}");

    DecisionOutcome::Decided(Decision {
        valid,
        satisfiable,
        tree,
        accessibility,
        valuations: world_valuations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableau_base::FormulaArena;

    #[test]
    fn atom_is_satisfiable_but_not_valid() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        arena.with_interner(|i| {
            assert_eq!(is_satisfiable(p, i), DecisionOutcome::Decided(true));
            assert_eq!(is_valid(p, i), DecisionOutcome::Decided(false));
        });
    }

    #[test]
    fn p_or_not_p_is_valid() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let not_p = arena.not(p);
        let tautology = arena.or(vec![p, not_p]);
        arena.with_interner(|i| {
            assert_eq!(is_valid(tautology, i), DecisionOutcome::Decided(true));
        });
    }

    #[test]
    fn p_and_not_p_is_unsatisfiable() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let not_p = arena.not(p);
        let contradiction = arena.and(vec![p, not_p]);
        arena.with_interner(|i| {
            assert_eq!(is_satisfiable(contradiction, i), DecisionOutcome::Decided(false));
        });
    }

    #[test]
    fn decide_reports_witness_for_satisfiable_non_valid_formula() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        arena.with_interner(|i| {
            let outcome = decide(p, i);
            match outcome {
                DecisionOutcome::Decided(decision) => {
                    assert!(decision.satisfiable);
                    assert!(!decision.valid);
                    assert!(!decision.tree.nodes.is_empty());
                }
                DecisionOutcome::Inconclusive { reason } => panic!("{reason}"),
            }
        });
    }
}
