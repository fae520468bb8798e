//! Integration test suite for the modal logic K decision procedure.
//!
//! This crate exists only to run integration tests from the `tests/`
//! directory. All actual test code lives in `tests/*.rs` files.
//!
//! # Test Organization
//!
//! | File | Covers |
//! |------|--------|
//! | `scenarios.rs` | The 8 concrete satisfiable/valid scenarios |
//! | `invariants.rs` | Duality, double negation, modal De Morgan, atom renaming, determinism |
//! | `witness.rs` | Witness-exporter output on satisfiable-but-not-valid formulas |
