//! Prefix/accessibility bookkeeping, branches, and the closure check for
//! the modal tableau.
//!
//! # Module Structure
//!
//! - [`sign`] - the `T`/`F` sign of a prefixed formula
//! - [`spf`] - `Spf`, a signed prefixed formula
//! - [`prefix_store`] - the accessibility relation between world prefixes
//! - [`branch`] - a single tableau branch and its expansion bookkeeping
//! - [`closure`] - the closure check

pub mod branch;
pub mod closure;
pub mod prefix_store;
pub mod sign;
pub mod spf;

pub use branch::Branch;
pub use closure::is_closed;
pub use prefix_store::PrefixStore;
pub use sign::Sign;
pub use spf::Spf;
