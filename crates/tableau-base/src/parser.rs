//! Recursive-descent / precedence-climbing parser for the surface formula
//! syntax.
//!
//! Precedence, weakest to strongest: `->` (right-associative) < `|` <
//! `&` < unary (`~`, `[]`/`□`, `<>`/`♢`) < atom/parenthesized group.

use crate::error::{ParseError, ParseErrorKind};
use crate::formula::{Formula, FormulaArena};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

struct Parser<'arena> {
    tokens: Vec<Token>,
    pos: usize,
    arena: &'arena FormulaArena,
}

impl<'arena> Parser<'arena> {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn parse_implies(&mut self) -> Result<&'arena Formula<'arena>, ParseError> {
        let lhs = self.parse_or()?;
        if matches!(self.peek().kind, TokenKind::Arrow) {
            self.advance();
            let rhs = self.parse_implies()?;
            return Ok(self.arena.implies(lhs, rhs));
        }
        Ok(lhs)
    }

    fn parse_or(&mut self) -> Result<&'arena Formula<'arena>, ParseError> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek().kind, TokenKind::Or) {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = self.arena.or(vec![lhs, rhs]);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<&'arena Formula<'arena>, ParseError> {
        let mut lhs = self.parse_unary()?;
        while matches!(self.peek().kind, TokenKind::And) {
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = self.arena.and(vec![lhs, rhs]);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<&'arena Formula<'arena>, ParseError> {
        match self.peek().kind {
            TokenKind::Not => {
                self.advance();
                let inner = self.parse_unary()?;
                Ok(self.arena.not(inner))
            }
            TokenKind::Box => {
                self.advance();
                let inner = self.parse_unary()?;
                Ok(self.arena.necessity(inner))
            }
            TokenKind::Diamond => {
                self.advance();
                let inner = self.parse_unary()?;
                Ok(self.arena.possibility(inner))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<&'arena Formula<'arena>, ParseError> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::Atom(name) => {
                self.advance();
                Ok(self.arena.atom(&name))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_implies()?;
                match self.peek().kind {
                    TokenKind::RParen => {
                        self.advance();
                        Ok(inner)
                    }
                    _ => Err(ParseError::new(ParseErrorKind::UnclosedParen, tok.span)),
                }
            }
            TokenKind::Eof => Err(ParseError::new(ParseErrorKind::UnexpectedEof, tok.span)),
            other => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken(describe(&other)),
                tok.span,
            )),
        }
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Atom(s) => s.clone(),
        TokenKind::Not => "~".to_string(),
        TokenKind::And => "&".to_string(),
        TokenKind::Or => "|".to_string(),
        TokenKind::Arrow => "->".to_string(),
        TokenKind::Box => "[]".to_string(),
        TokenKind::Diamond => "<>".to_string(),
        TokenKind::LParen => "(".to_string(),
        TokenKind::RParen => ")".to_string(),
        TokenKind::Eof => "<eof>".to_string(),
    }
}

/// Parse a formula from its surface syntax, allocating every node (and
/// interning every atom name) out of `arena`.
pub fn parse<'arena>(
    source: &str,
    arena: &'arena FormulaArena,
) -> Result<&'arena Formula<'arena>, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    if tokens.len() == 1 && matches!(tokens[0].kind, TokenKind::Eof) {
        return Err(ParseError::new(
            ParseErrorKind::EmptyInput,
            tokens[0].span,
        ));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        arena,
    };
    let formula = parser.parse_implies()?;
    match parser.peek().kind {
        TokenKind::Eof => Ok(formula),
        ref other => {
            let span = parser.peek().span;
            Err(ParseError::new(
                ParseErrorKind::TrailingJunk(describe(other)),
                span,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::FormulaView;

    fn roundtrip(source: &str) -> String {
        let arena = FormulaArena::new();
        let f = parse(source, &arena).unwrap();
        arena.with_interner(|i| {
            FormulaView {
                formula: f,
                interner: i,
            }
            .to_string()
        })
    }

    #[test]
    fn parses_atom() {
        assert_eq!(roundtrip("p"), "p");
    }

    #[test]
    fn parses_precedence_and_over_or() {
        assert_eq!(roundtrip("p | q & r"), "p | q & r");
    }

    #[test]
    fn parses_implies_right_associative() {
        assert_eq!(roundtrip("p -> q -> r"), "p -> q -> r");
    }

    #[test]
    fn parses_k_axiom() {
        assert_eq!(
            roundtrip("[](p -> q) -> ([]p -> []q)"),
            "[](p -> q) -> ([]p -> []q)"
        );
    }

    #[test]
    fn parses_stacked_unary() {
        assert_eq!(roundtrip("~[]~p"), "~[]~p");
    }

    #[test]
    fn parens_override_precedence() {
        assert_eq!(roundtrip("(p | q) & r"), "(p | q) & r");
    }

    #[test]
    fn rejects_empty_input() {
        let arena = FormulaArena::new();
        let err = parse("   ", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyInput);
    }

    #[test]
    fn rejects_unclosed_paren() {
        let arena = FormulaArena::new();
        let err = parse("(p & q", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedParen);
    }

    #[test]
    fn rejects_trailing_junk() {
        let arena = FormulaArena::new();
        let err = parse("p q", &arena).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::TrailingJunk(_)));
    }

    #[test]
    fn rejects_dangling_operator() {
        let arena = FormulaArena::new();
        let err = parse("p &", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    }
}
