mod common;

use common::check;

#[test]
fn audit_excluded_middle_is_valid_and_satisfiable() {
    assert_eq!(check("p | ~p"), (true, true));
}

#[test]
fn audit_contradiction_is_neither_valid_nor_satisfiable() {
    assert_eq!(check("p & ~p"), (false, false));
}

#[test]
fn audit_k_axiom_is_valid_and_satisfiable() {
    assert_eq!(check("[](p -> q) -> ([]p -> []q)"), (true, true));
}

#[test]
fn audit_t_axiom_is_not_valid_in_k_but_satisfiable() {
    assert_eq!(check("[]p -> p"), (false, true));
}

#[test]
fn audit_diamond_distributes_over_or_and_is_valid() {
    assert_eq!(check("<>(p | q) -> (<>p | <>q)"), (true, true));
}

#[test]
fn audit_diamond_of_contradiction_is_unsatisfiable() {
    assert_eq!(check("<>(p & ~p)"), (false, false));
}

#[test]
fn audit_box_does_not_imply_diamond_in_k_but_is_satisfiable() {
    assert_eq!(check("[]p -> <>p"), (false, true));
}

#[test]
fn audit_bare_diamond_is_satisfiable_but_not_valid() {
    assert_eq!(check("<>p"), (false, true));
}
