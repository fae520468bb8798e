//! The tableau rule table: a pure mapping from one signed prefixed formula
//! to the branch-fragments it expands into.
//!
//! δ rules (`F,w,□φ` / `T,w,◇φ`) always mint a fresh world via
//! [`PrefixStore::new_successor`], so they need `&mut PrefixStore` even
//! though they never branch. ν rules (`T,w,□φ` / `F,w,◇φ`) are different in
//! kind: their output depends on *all* of `w`'s current successors and must
//! be able to re-fire as new successors appear, which the expansion driver
//! tracks per-world — so this module only tells the driver which worlds a ν
//! formula would instantiate over ([`RuleOutput::Nu`]), and the driver
//! decides what is actually new.

use tableau_base::Formula;
use tableau_kernel::{PrefixStore, Sign, Spf};

/// Where a formula sits in the driver's firing-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Literal,
    Alpha,
    Beta,
    Delta,
    Nu,
}

pub fn classify(spf: &Spf<'_>) -> RuleKind {
    match (spf.sign, spf.formula) {
        (_, Formula::Atom(_)) => RuleKind::Literal,
        (Sign::T, Formula::Not(_))
        | (Sign::F, Formula::Not(_))
        | (Sign::T, Formula::And(_))
        | (Sign::F, Formula::Or(_))
        | (Sign::F, Formula::Implies(_, _)) => RuleKind::Alpha,
        (Sign::F, Formula::And(_)) | (Sign::T, Formula::Or(_)) | (Sign::T, Formula::Implies(_, _)) => {
            RuleKind::Beta
        }
        (Sign::F, Formula::Box(_)) | (Sign::T, Formula::Diamond(_)) => RuleKind::Delta,
        (Sign::T, Formula::Box(_)) | (Sign::F, Formula::Diamond(_)) => RuleKind::Nu,
    }
}

pub enum RuleOutput<'a> {
    /// A literal: nothing to expand.
    None,
    /// One fragment appended in place.
    Alpha(Vec<Spf<'a>>),
    /// Multiple fragments; the branch forks one child per entry.
    Beta(Vec<Vec<Spf<'a>>>),
    /// A δ rule already minted its fresh world; here is the one new `Spf`.
    Delta(Spf<'a>),
    /// A ν rule: the sign/formula to instantiate at each of `w`'s
    /// successors. The driver computes which successors are still missing.
    Nu { sign: Sign, inner: &'a Formula<'a> },
}

/// Apply the rule table to `spf`, minting a fresh world via `prefixes` if
/// `spf` is a δ formula.
pub fn apply<'a>(spf: &Spf<'a>, prefixes: &mut PrefixStore) -> RuleOutput<'a> {
    match (spf.sign, spf.formula) {
        (_, Formula::Atom(_)) => RuleOutput::None,

        (Sign::T, Formula::Not(inner)) => {
            RuleOutput::Alpha(vec![Spf::new(Sign::F, spf.prefix.clone(), inner)])
        }
        (Sign::F, Formula::Not(inner)) => {
            RuleOutput::Alpha(vec![Spf::new(Sign::T, spf.prefix.clone(), inner)])
        }

        (Sign::T, Formula::And(items)) => RuleOutput::Alpha(
            items
                .iter()
                .map(|f| Spf::new(Sign::T, spf.prefix.clone(), *f))
                .collect(),
        ),
        (Sign::F, Formula::And(items)) => RuleOutput::Beta(
            items
                .iter()
                .map(|f| vec![Spf::new(Sign::F, spf.prefix.clone(), *f)])
                .collect(),
        ),

        (Sign::T, Formula::Or(items)) => RuleOutput::Beta(
            items
                .iter()
                .map(|f| vec![Spf::new(Sign::T, spf.prefix.clone(), *f)])
                .collect(),
        ),
        (Sign::F, Formula::Or(items)) => RuleOutput::Alpha(
            items
                .iter()
                .map(|f| Spf::new(Sign::F, spf.prefix.clone(), *f))
                .collect(),
        ),

        (Sign::T, Formula::Implies(l, r)) => RuleOutput::Beta(vec![
            vec![Spf::new(Sign::F, spf.prefix.clone(), *l)],
            vec![Spf::new(Sign::T, spf.prefix.clone(), *r)],
        ]),
        (Sign::F, Formula::Implies(l, r)) => RuleOutput::Alpha(vec![
            Spf::new(Sign::T, spf.prefix.clone(), *l),
            Spf::new(Sign::F, spf.prefix.clone(), *r),
        ]),

        (Sign::F, Formula::Box(inner)) => {
            let w2 = prefixes.new_successor(&spf.prefix);
            RuleOutput::Delta(Spf::new(Sign::F, w2, *inner))
        }
        (Sign::T, Formula::Diamond(inner)) => {
            let w2 = prefixes.new_successor(&spf.prefix);
            RuleOutput::Delta(Spf::new(Sign::T, w2, *inner))
        }

        (Sign::T, Formula::Box(inner)) => RuleOutput::Nu {
            sign: Sign::T,
            inner,
        },
        (Sign::F, Formula::Diamond(inner)) => RuleOutput::Nu {
            sign: Sign::F,
            inner,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableau_base::FormulaArena;
    use tableau_kernel::PrefixStore;

    #[test]
    fn classifies_every_shape() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        assert_eq!(classify(&Spf::new(Sign::T, "1", p)), RuleKind::Literal);
        assert_eq!(
            classify(&Spf::new(Sign::T, "1", arena.not(p))),
            RuleKind::Alpha
        );
        assert_eq!(
            classify(&Spf::new(Sign::F, "1", arena.and(vec![p, p]))),
            RuleKind::Beta
        );
        assert_eq!(
            classify(&Spf::new(Sign::F, "1", arena.necessity(p))),
            RuleKind::Delta
        );
        assert_eq!(
            classify(&Spf::new(Sign::T, "1", arena.necessity(p))),
            RuleKind::Nu
        );
    }

    #[test]
    fn delta_box_mints_fresh_world() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let (mut store, root) = PrefixStore::root();
        let spf = Spf::new(Sign::F, root, arena.necessity(p));
        match apply(&spf, &mut store) {
            RuleOutput::Delta(out) => {
                assert_eq!(out.prefix, "1.1");
                assert_eq!(out.sign, Sign::F);
            }
            _ => panic!("expected delta"),
        }
    }

    #[test]
    fn beta_implies_true_forks_two_fragments() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let q = arena.atom("q");
        let (mut store, root) = PrefixStore::root();
        let spf = Spf::new(Sign::T, root, arena.implies(p, q));
        match apply(&spf, &mut store) {
            RuleOutput::Beta(frags) => assert_eq!(frags.len(), 2),
            _ => panic!("expected beta"),
        }
    }

    #[test]
    fn nu_box_reports_sign_and_inner_without_consuming_store() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let (mut store, root) = PrefixStore::root();
        let spf = Spf::new(Sign::T, root, arena.necessity(p));
        match apply(&spf, &mut store) {
            RuleOutput::Nu { sign, inner } => {
                assert_eq!(sign, Sign::T);
                assert!(inner.equals(p));
            }
            _ => panic!("expected nu"),
        }
    }
}
