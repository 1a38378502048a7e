//! Byte-level tokenizer for calculator input
//!
//! The tokenizer is a cursor over the raw input bytes. It collapses
//! whitespace, emits zero-copy tokens, and never fails: anything it does
//! not recognize becomes a token of kind [`TokenKind::Undefined`] for the
//! parser to reject. Once past the end of the input it returns
//! `EndOfStream` forever. It never synthesizes `ImplicitTimes` - that is
//! the parser's job.

use crate::token::{Token, TokenKind};
use mathexpr_ast::{Constant, NumberValue};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Streaming tokenizer over a single line of calculator input
#[derive(Debug, Clone)]
pub struct Tokenizer<'input> {
    input: &'input str,
    bytes: &'input [u8],
    position: usize,
    length: usize,
}

impl<'input> Tokenizer<'input> {
    /// Create a new tokenizer for the given input
    pub fn new(input: &'input str) -> Self {
        let bytes = input.as_bytes();
        Self {
            input,
            bytes,
            position: 0,
            length: bytes.len(),
        }
    }

    /// Current byte offset into the input
    pub fn position(&self) -> usize {
        self.position
    }

    /// Pop the next token
    pub fn pop(&mut self) -> Token<'input> {
        self.skip_whitespace();

        if self.position >= self.length {
            return Token::end_of_stream();
        }

        let start = self.position;
        match self.bytes[self.position] {
            b'0'..=b'9' => self.pop_number(),
            ch if ch.is_ascii_alphabetic() => self.pop_identifier(),
            b'+' => self.pop_single(TokenKind::Plus),
            b'-' => self.pop_single(TokenKind::Minus),
            b'*' => self.pop_single(TokenKind::Times),
            b'/' => self.pop_single(TokenKind::Slash),
            b'^' => self.pop_single(TokenKind::Power),
            b'!' => self.pop_single(TokenKind::Bang),
            b'=' => self.pop_single(TokenKind::Equal),
            b',' => self.pop_single(TokenKind::Comma),
            b'(' => self.pop_single(TokenKind::LeftParenthesis),
            b')' => self.pop_single(TokenKind::RightParenthesis),
            b'[' => self.pop_single(TokenKind::LeftBracket),
            b']' => self.pop_single(TokenKind::RightBracket),
            b'{' => self.pop_single(TokenKind::LeftBrace),
            b'}' => self.pop_single(TokenKind::RightBrace),
            _ => {
                // Multi-byte glyphs from the calculator keyboard.
                let ch = match self.input[self.position..].chars().next() {
                    Some(ch) => ch,
                    None => return Token::end_of_stream(),
                };
                self.position += ch.len_utf8();
                let text = &self.input[start..self.position];
                if ch == '→' {
                    Token::new(TokenKind::Store, text)
                } else if Constant::from_glyph(ch).is_some() {
                    Token::new(TokenKind::Constant, text)
                } else {
                    Token::new(TokenKind::Undefined, text)
                }
            }
        }
    }

    #[inline]
    fn pop_single(&mut self, kind: TokenKind) -> Token<'input> {
        let start = self.position;
        self.position += 1;
        Token::new(kind, &self.input[start..self.position])
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while self.position < self.length {
            match self.bytes[self.position] {
                b' ' | b'\t' | b'\r' | b'\n' => self.position += 1,
                _ => break,
            }
        }
    }

    #[inline]
    fn skip_digits(&mut self) {
        while self.position < self.length && self.bytes[self.position].is_ascii_digit() {
            self.position += 1;
        }
    }

    /// Scan a number literal: digits with an optional fractional part.
    /// A `.` not followed by a digit is left for the next pop.
    fn pop_number(&mut self) -> Token<'input> {
        let start = self.position;
        self.skip_digits();

        let mut is_decimal = false;
        if self.position + 1 < self.length
            && self.bytes[self.position] == b'.'
            && self.bytes[self.position + 1].is_ascii_digit()
        {
            self.position += 1;
            self.skip_digits();
            is_decimal = true;
        }

        let text = &self.input[start..self.position];
        let value = if is_decimal {
            Decimal::from_str(text).ok().map(NumberValue::Decimal)
        } else {
            match text.parse::<i64>() {
                Ok(value) => Some(NumberValue::Integer(value)),
                // Out of i64 range: keep the digits as a decimal.
                Err(_) => Decimal::from_str(text).ok().map(NumberValue::Decimal),
            }
        };
        match value {
            Some(value) => Token::number(text, value),
            None => Token::new(TokenKind::Undefined, text),
        }
    }

    /// Scan an identifier: an ASCII alphabetic run, optionally closed by a
    /// single `_` (the subscript-prefix forms `u_`, `v_`, `log_`).
    fn pop_identifier(&mut self) -> Token<'input> {
        let start = self.position;
        while self.position < self.length && self.bytes[self.position].is_ascii_alphabetic() {
            self.position += 1;
        }
        if self.position < self.length && self.bytes[self.position] == b'_' {
            self.position += 1;
        }
        Token::new(TokenKind::Identifier, &self.input[start..self.position])
    }
}
