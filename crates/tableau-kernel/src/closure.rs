//! The closure check: a branch is closed iff some world asserts both the
//! truth and falsity of the same atom.

use std::collections::{HashMap, HashSet};

use tableau_base::{Formula, Symbol};

use crate::branch::Branch;
use crate::sign::Sign;

pub fn is_closed(branch: &Branch<'_>) -> bool {
    let mut true_atoms: HashMap<&str, HashSet<Symbol>> = HashMap::new();
    let mut false_atoms: HashMap<&str, HashSet<Symbol>> = HashMap::new();

    for spf in &branch.spfs {
        if let Formula::Atom(sym) = spf.formula {
            let bucket = match spf.sign {
                Sign::T => &mut true_atoms,
                Sign::F => &mut false_atoms,
            };
            bucket.entry(spf.prefix.as_str()).or_default().insert(*sym);
        }
    }

    true_atoms.iter().any(|(world, syms)| {
        false_atoms
            .get(world)
            .map(|fs| syms.intersection(fs).next().is_some())
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::prefix_store::PrefixStore;
    use crate::spf::Spf;
    use tableau_base::FormulaArena;

    #[test]
    fn open_branch_is_not_closed() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let q = arena.atom("q");
        let (store, root) = PrefixStore::root();
        let mut branch = Branch::new(Spf::new(Sign::T, root.clone(), p), store);
        branch.push(Spf::new(Sign::F, root, q));
        assert!(!is_closed(&branch));
    }

    #[test]
    fn same_atom_true_and_false_at_same_world_closes() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let (store, root) = PrefixStore::root();
        let mut branch = Branch::new(Spf::new(Sign::T, root.clone(), p), store);
        branch.push(Spf::new(Sign::F, root, p));
        assert!(is_closed(&branch));
    }

    #[test]
    fn conflicting_signs_at_different_worlds_does_not_close() {
        let arena = FormulaArena::new();
        let p = arena.atom("p");
        let (mut store, root) = PrefixStore::root();
        let child = store.new_successor(&root);
        let mut branch = Branch::new(Spf::new(Sign::T, root, p), store);
        branch.push(Spf::new(Sign::F, child, p));
        assert!(!is_closed(&branch));
    }
}
