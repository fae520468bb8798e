//! Parse errors for the surface formula syntax.

use crate::token::Span;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input contained no tokens at all (empty or all whitespace).
    EmptyInput,
    /// A character that isn't part of the grammar (not a letter, operator,
    /// or parenthesis).
    UnknownCharacter(char),
    /// A `(` was never matched by a `)`.
    UnclosedParen,
    /// A complete formula parsed, but tokens remained afterward.
    TrailingJunk(String),
    /// The parser needed a token (an atom, unary operator, or `(`) and
    /// found something else.
    UnexpectedToken(String),
    /// The parser needed a token and ran out of input.
    UnexpectedEof,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyInput => write!(f, "empty input"),
            ParseErrorKind::UnknownCharacter(c) => write!(f, "unknown character '{}'", c),
            ParseErrorKind::UnclosedParen => write!(f, "unclosed '('"),
            ParseErrorKind::TrailingJunk(s) => write!(f, "trailing input after formula: '{}'", s),
            ParseErrorKind::UnexpectedToken(s) => write!(f, "unexpected token '{}'", s),
            ParseErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Render the error with a caret under the offending span, e.g.
    ///
    /// ```text
    /// error: unknown character '%'
    ///   p & %q
    ///       ^
    /// ```
    pub fn display_with_source(&self, source: &str) -> String {
        let col = self.span.start.min(source.len());
        let len = (self.span.end.saturating_sub(self.span.start)).max(1);
        let underline = format!("{}{}", " ".repeat(col), "^".repeat(len));
        format!("error: {}\n  {}\n  {}", self.kind, source, underline)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {}..{})", self.kind, self.span.start, self.span.end)
    }
}

impl std::error::Error for ParseError {}
