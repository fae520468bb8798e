//! A single tableau branch: its prefixed formulas plus the accessibility
//! and expansion bookkeeping needed to drive the branch to saturation.

use std::collections::{HashMap, HashSet};

use crate::prefix_store::PrefixStore;
use crate::spf::Spf;

/// One branch of the tableau.
///
/// `spfs` is append-only: indices into it are stable for the lifetime of
/// the branch, so `expanded`/`nu_discharged` can use `usize` keys instead
/// of needing a node-identity scheme.
#[derive(Debug, Clone)]
pub struct Branch<'a> {
    pub spfs: Vec<Spf<'a>>,
    pub prefixes: PrefixStore,
    pub expanded: HashSet<usize>,
    pub nu_discharged: HashMap<usize, HashSet<String>>,
}

impl<'a> Branch<'a> {
    pub fn new(root: Spf<'a>, prefixes: PrefixStore) -> Self {
        Branch {
            spfs: vec![root],
            prefixes,
            expanded: HashSet::new(),
            nu_discharged: HashMap::new(),
        }
    }

    /// Append a freshly derived Spf, returning its stable index.
    pub fn push(&mut self, spf: Spf<'a>) -> usize {
        self.spfs.push(spf);
        self.spfs.len() - 1
    }

    pub fn mark_expanded(&mut self, idx: usize) {
        self.expanded.insert(idx);
    }

    pub fn is_expanded(&self, idx: usize) -> bool {
        self.expanded.contains(&idx)
    }

    /// Has the ν-formula at `idx` already been instantiated at world `w`?
    pub fn nu_discharged_at(&self, idx: usize, w: &str) -> bool {
        self.nu_discharged
            .get(&idx)
            .map(|ws| ws.contains(w))
            .unwrap_or(false)
    }

    pub fn mark_nu_discharged(&mut self, idx: usize, w: &str) {
        self.nu_discharged
            .entry(idx)
            .or_default()
            .insert(w.to_string());
    }

    pub fn contains(&self, other: &Spf<'a>) -> bool {
        self.spfs.iter().any(|spf| spf == other)
    }
}
