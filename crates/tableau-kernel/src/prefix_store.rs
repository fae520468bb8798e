//! The accessibility relation between world prefixes.
//!
//! Prefixes are dotted strings (`"1"`, `"1.1"`, `"1.2"`, ...); `w2` is an
//! immediate successor of `w` iff `w2 == "{w}.{k}"` for some `k` and that
//! edge was recorded by [`PrefixStore::new_successor`].

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PrefixStore {
    successors: HashMap<String, Vec<String>>,
}

impl PrefixStore {
    /// Build a fresh store seeded with the root world `"1"`.
    pub fn root() -> (Self, String) {
        let root = "1".to_string();
        let mut successors = HashMap::new();
        successors.insert(root.clone(), Vec::new());
        (PrefixStore { successors }, root)
    }

    /// Allocate and record a new successor of `w`, returning its prefix.
    pub fn new_successor(&mut self, w: &str) -> String {
        let count = self.successors.get(w).map(Vec::len).unwrap_or(0);
        let fresh = format!("{w}.{}", count + 1);
        self.successors
            .entry(w.to_string())
            .or_default()
            .push(fresh.clone());
        self.successors.entry(fresh.clone()).or_default();
        fresh
    }

    pub fn successors(&self, w: &str) -> &[String] {
        self.successors.get(w).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_successor(&self, w: &str, w2: &str) -> bool {
        self.successors(w).iter().any(|s| s == w2)
    }

    /// Every recorded accessibility edge, for the witness exporter.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.successors
            .iter()
            .flat_map(|(w, ws)| ws.iter().map(move |w2| (w.as_str(), w2.as_str())))
    }
}
