//! The decision facade (`is_satisfiable`/`is_valid`/`decide`) and the
//! witness exporter that turns a decided tableau into a fully owned,
//! JSON-serializable snapshot.
//!
//! # Module Structure
//!
//! - [`facade`] - `is_satisfiable`, `is_valid`, `decide`, `DecisionOutcome`
//! - [`witness`] - `WitnessTree`, `WitnessGraph`, `WorldValuation`

pub mod facade;
pub mod witness;

pub use facade::{decide, decide_with, is_satisfiable, is_satisfiable_with, is_valid, is_valid_with, Decision, DecisionOutcome};
pub use witness::{valuations, WitnessEdge, WitnessGraph, WitnessNode, WitnessTree, WorldValuation};

pub use tableau_base::parse;
pub use tableau_base::{Formula, FormulaArena, ParseError};
pub use tableau_engine::ExpansionConfig;
