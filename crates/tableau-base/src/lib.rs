//! Arena-backed modal-formula AST, atom interning, and the surface-syntax
//! parser.
//!
//! # Module Structure
//!
//! - [`formula`] - the `Formula` AST, its arena, and the `Display` view
//! - [`intern`] - atom-name interning (`Symbol`/`Interner`)
//! - [`lexer`] / [`parser`] / [`error`] - surface-syntax tokenizer,
//!   recursive-descent parser, and `ParseError`

pub mod error;
pub mod formula;
pub mod intern;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::{ParseError, ParseErrorKind};
pub use formula::{Formula, FormulaArena, FormulaView};
pub use intern::{Interner, Symbol};
pub use parser::parse;
