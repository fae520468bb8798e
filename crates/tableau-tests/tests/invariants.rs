mod common;

use common::check;

const SAMPLE_FORMULAS: &[&str] = &[
    "p",
    "p & q",
    "p | ~p",
    "p & ~p",
    "[]p",
    "<>p",
    "[](p -> q) -> ([]p -> []q)",
    "<>(p | q) -> (<>p | <>q)",
    "[]p -> p",
    "~[]~p",
];

#[test]
fn audit_duality_valid_iff_negation_unsatisfiable() {
    for formula in SAMPLE_FORMULAS {
        let (_, valid) = check(formula);
        let (neg_sat, _) = check(&format!("~({formula})"));
        assert_eq!(
            valid, !neg_sat,
            "duality failed for {formula}: valid={valid}, sat(~φ)={neg_sat}"
        );
    }
}

#[test]
fn audit_double_negation_agrees_with_original() {
    for formula in SAMPLE_FORMULAS {
        let original = check(formula);
        let double_negated = check(&format!("~~({formula})"));
        assert_eq!(
            original, double_negated,
            "double negation disagreed for {formula}"
        );
    }
}

#[test]
fn audit_modal_de_morgan_not_box_agrees_with_diamond_not() {
    let pairs = [
        ("~[]p", "<>~p"),
        ("~<>p", "[]~p"),
        ("~[](p -> q)", "<>~(p -> q)"),
    ];
    for (not_box, diamond_not) in pairs {
        assert_eq!(
            check(not_box),
            check(diamond_not),
            "modal De Morgan disagreed for {not_box} vs {diamond_not}"
        );
    }
}

#[test]
fn audit_atom_renaming_preserves_both_answers() {
    let renamed = [
        ("p & q", "a & b"),
        ("p | ~p", "x | ~x"),
        ("[]p -> p", "[]z -> z"),
        ("<>(p | q) -> (<>p | <>q)", "<>(m | n) -> (<>m | <>n)"),
    ];
    for (original, renamed) in renamed {
        assert_eq!(
            check(original),
            check(renamed),
            "renaming atoms changed the answer for {original} -> {renamed}"
        );
    }
}

#[test]
fn audit_decide_is_deterministic_across_repeated_calls() {
    for formula in SAMPLE_FORMULAS {
        let first = check(formula);
        for _ in 0..5 {
            assert_eq!(check(formula), first, "non-deterministic result for {formula}");
        }
    }
}
