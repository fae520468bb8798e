mod common;

use common::decide_owned;

const SATISFIABLE_NOT_VALID: &[&str] = &["[]p -> p", "<>p", "[]p -> <>p"];

#[test]
fn audit_satisfiable_not_valid_formulas_produce_a_nonempty_witness() {
    for formula in SATISFIABLE_NOT_VALID {
        let decision = decide_owned(formula);
        assert!(decision.satisfiable, "{formula} should be satisfiable");
        assert!(!decision.valid, "{formula} should not be valid");
        assert!(
            !decision.tree.nodes.is_empty(),
            "{formula}: proof tree should not be empty"
        );
        assert!(
            !decision.valuations.is_empty(),
            "{formula}: witness should expose a per-world valuation"
        );
    }
}

#[test]
fn audit_diamond_p_witness_has_an_accessibility_edge_to_a_world_where_p_holds() {
    let decision = decide_owned("<>p");
    assert!(!decision.accessibility.edges.is_empty());
    let witnessing_world = &decision.accessibility.edges[0].to;
    let valuation = decision
        .valuations
        .iter()
        .find(|v| &v.world == witnessing_world)
        .unwrap_or_else(|| panic!("no valuation recorded for world {witnessing_world}"));
    assert!(valuation.true_atoms.contains("p"));
}

#[test]
fn audit_unsatisfiable_formula_decision_reports_empty_witness() {
    // decide() always exposes the satisfiability run's witness; when that
    // run has no open branch at all, the snapshot is empty rather than an
    // invented countermodel.
    let decision = decide_owned("p & ~p");
    assert!(!decision.satisfiable);
    assert!(!decision.valid);
    assert!(decision.valuations.is_empty());
    assert!(decision.accessibility.edges.is_empty());
}
