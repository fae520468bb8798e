//! The tableau rule table and the per-branch expansion driver.
//!
//! # Module Structure
//!
//! - [`rules`] - the pure `Spf -> RuleOutput` rule table
//! - [`proof_tree`] - the recorded proof tree the driver builds as it runs
//! - [`driver`] - the priority-ordered expansion loop, depth guard, and
//!   branch forking

pub mod driver;
pub mod proof_tree;
pub mod rules;

pub use driver::{run, ExpansionConfig, ExpansionOutcome};
pub use proof_tree::{ProofNode, ProofTree};
pub use rules::{apply, classify, RuleKind, RuleOutput};
