//! `modalc` - standalone binary entry point.
//!
//! Thin wrapper around [`tableau_cli::run_cli`]; all command logic lives
//! in the library crate for testability.

fn main() {
    if let Err(e) = tableau_cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
