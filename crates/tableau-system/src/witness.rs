//! A fully owned, serializable snapshot of one decision run: the proof
//! tree, the accessibility relation, and the literal valuation at each
//! world of the branch the snapshot is drawn from.
//!
//! These types own every string directly (no arena lifetime), so the
//! snapshot legally outlives the `FormulaArena` that produced it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tableau_base::{Formula, Interner};
use tableau_engine::ProofTree as EngineProofTree;
use tableau_kernel::{Branch, Sign};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessNode {
    pub id: u64,
    pub label: String,
    pub children: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessTree {
    pub nodes: Vec<WitnessNode>,
    pub root: u64,
}

impl From<&EngineProofTree> for WitnessTree {
    fn from(tree: &EngineProofTree) -> Self {
        WitnessTree {
            nodes: tree
                .nodes
                .iter()
                .map(|n| WitnessNode {
                    id: n.id,
                    label: n.label.clone(),
                    children: n.children.clone(),
                })
                .collect(),
            root: tree.root,
        }
    }
}

impl WitnessTree {
    pub fn empty() -> Self {
        WitnessTree {
            nodes: Vec::new(),
            root: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WitnessGraph {
    pub edges: Vec<WitnessEdge>,
}

impl WitnessGraph {
    pub fn from_branch(branch: &Branch<'_>) -> Self {
        let mut edges: Vec<WitnessEdge> = branch
            .prefixes
            .edges()
            .map(|(from, to)| WitnessEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect();
        edges.sort_by(|a, b| (a.from.as_str(), a.to.as_str()).cmp(&(b.from.as_str(), b.to.as_str())));
        WitnessGraph { edges }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldValuation {
    pub world: String,
    pub true_atoms: BTreeSet<String>,
    pub false_atoms: BTreeSet<String>,
}

/// The per-world literal valuation of `branch`, read directly off its
/// `Spf`s (only atoms contribute; modal literals are not yet resolved to
/// truth values at this level).
pub fn valuations(branch: &Branch<'_>, interner: &Interner) -> Vec<WorldValuation> {
    use std::collections::BTreeMap;

    let mut by_world: BTreeMap<String, (BTreeSet<String>, BTreeSet<String>)> = BTreeMap::new();
    for spf in &branch.spfs {
        if let Formula::Atom(sym) = spf.formula {
            let entry = by_world.entry(spf.prefix.clone()).or_default();
            let name = interner.resolve(*sym).to_string();
            match spf.sign {
                Sign::T => {
                    entry.0.insert(name);
                }
                Sign::F => {
                    entry.1.insert(name);
                }
            }
        }
    }

    by_world
        .into_iter()
        .map(|(world, (true_atoms, false_atoms))| WorldValuation {
            world,
            true_atoms,
            false_atoms,
        })
        .collect()
}
