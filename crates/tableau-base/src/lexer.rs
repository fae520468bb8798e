//! Tokenizer for the surface formula syntax.
//!
//! Unlike a natural-language front end this grammar has no line/indent
//! structure, so a single flat pass over the bytes is enough: skip
//! whitespace, recognize the handful of operator characters (ASCII or
//! their Unicode spellings), and greedily consume runs of letters as atom
//! names.

use crate::error::{ParseError, ParseErrorKind};
use crate::token::{Span, Token, TokenKind};

pub struct Lexer<'s> {
    source: &'s str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Lexer {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<(usize, char)> {
        self.chars.get(self.pos + offset).copied()
    }

    fn byte_end(&self) -> usize {
        self.source.len()
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some((start, c)) = self.peek() else {
                let end = self.byte_end();
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    span: Span::new(end, end),
                });
                break;
            };

            let (kind, len) = match c {
                '~' => (TokenKind::Not, 1),
                '&' => (TokenKind::And, 1),
                '|' => (TokenKind::Or, 1),
                '(' => (TokenKind::LParen, 1),
                ')' => (TokenKind::RParen, 1),
                '□' => (TokenKind::Box, 1),
                '♢' => (TokenKind::Diamond, 1),
                '[' if matches!(self.peek_at(1), Some((_, ']'))) => (TokenKind::Box, 2),
                '<' if matches!(self.peek_at(1), Some((_, '>'))) => (TokenKind::Diamond, 2),
                '-' if matches!(self.peek_at(1), Some((_, '>'))) => (TokenKind::Arrow, 2),
                c if c.is_ascii_alphabetic() => {
                    let mut end_idx = self.pos;
                    while matches!(self.chars.get(end_idx), Some((_, c)) if c.is_ascii_alphabetic())
                    {
                        end_idx += 1;
                    }
                    let end_byte = self
                        .chars
                        .get(end_idx)
                        .map(|(b, _)| *b)
                        .unwrap_or_else(|| self.byte_end());
                    let text = self.source[start..end_byte].to_string();
                    tokens.push(Token {
                        kind: TokenKind::Atom(text),
                        span: Span::new(start, end_byte),
                    });
                    self.pos = end_idx;
                    continue;
                }
                other => {
                    let end = start + other.len_utf8();
                    return Err(ParseError::new(
                        ParseErrorKind::UnknownCharacter(other),
                        Span::new(start, end),
                    ));
                }
            };

            let end = self
                .peek_at(len)
                .map(|(b, _)| b)
                .unwrap_or_else(|| self.byte_end());
            tokens.push(Token {
                kind,
                span: Span::new(start, end),
            });
            self.pos += len;
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.peek() {
            if c.is_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }
}
