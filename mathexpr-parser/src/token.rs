//! Lexical tokens and the precedence ordering

use mathexpr_ast::{Constant, Expression, NumberValue};
use std::fmt;

/// Token kinds, declared in ascending precedence order
///
/// The declaration order is the precedence table: the parser's single
/// climbing test is `next_kind > stopping_kind` on the derived `Ord`.
/// Reordering variants changes the grammar.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// End of the input stream
    EndOfStream,
    /// Equality (=)
    Equal,
    /// Store arrow (→)
    Store,
    /// Closing bracket (])
    RightBracket,
    /// Closing parenthesis ())
    RightParenthesis,
    /// Closing brace (})
    RightBrace,
    /// Parameter separator (,)
    Comma,
    /// Addition (+)
    Plus,
    /// Subtraction or unary minus (-)
    Minus,
    /// Explicit multiplication (*)
    Times,
    /// Division (/)
    Slash,
    /// Multiplication by juxtaposition, synthesized by the parser
    ImplicitTimes,
    /// Exponentiation (^)
    Power,
    /// Factorial (!)
    Bang,
    /// Opening bracket ([)
    LeftBracket,
    /// Opening parenthesis (()
    LeftParenthesis,
    /// Opening brace ({)
    LeftBrace,
    /// Empty placeholder box from the 2D editor
    Empty,
    /// Mathematical constant glyph (π, ℯ, ⅈ)
    Constant,
    /// Numeric literal
    Number,
    /// Identifier (alphabetic run, optionally closed by `_`)
    Identifier,
    /// Unrecognized input
    Undefined,
}

impl TokenKind {
    /// The climbing test: whether this kind binds tighter than a stopping kind
    #[inline]
    pub fn has_precedence_over(self, stopping: TokenKind) -> bool {
        self > stopping
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::EndOfStream => "end of input",
            TokenKind::Equal => "=",
            TokenKind::Store => "→",
            TokenKind::RightBracket => "]",
            TokenKind::RightParenthesis => ")",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Slash => "/",
            TokenKind::ImplicitTimes => "implicit multiplication",
            TokenKind::Power => "^",
            TokenKind::Bang => "!",
            TokenKind::LeftBracket => "[",
            TokenKind::LeftParenthesis => "(",
            TokenKind::LeftBrace => "{",
            TokenKind::Empty => "empty box",
            TokenKind::Constant => "constant",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Undefined => "unrecognized input",
        };
        f.write_str(text)
    }
}

/// A lexical token: a kind, a zero-copy slice of the source, and for
/// number tokens the parsed value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'input> {
    kind: TokenKind,
    text: &'input str,
    value: Option<NumberValue>,
}

impl<'input> Token<'input> {
    /// Create a token with no numeric value
    pub fn new(kind: TokenKind, text: &'input str) -> Self {
        Self {
            kind,
            text,
            value: None,
        }
    }

    /// Create a number token
    pub fn number(text: &'input str, value: NumberValue) -> Self {
        Self {
            kind: TokenKind::Number,
            text,
            value: Some(value),
        }
    }

    /// The parser-synthesized implicit multiplication token
    pub fn implicit_times() -> Self {
        Self {
            kind: TokenKind::ImplicitTimes,
            text: "",
            value: None,
        }
    }

    /// The end-of-stream token
    pub fn end_of_stream() -> Self {
        Self {
            kind: TokenKind::EndOfStream,
            text: "",
            value: None,
        }
    }

    /// This token's kind
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Equality on kind
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The source slice this token covers
    pub fn text(&self) -> &'input str {
        self.text
    }

    /// Byte length of the source slice
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the source slice is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The parsed value of a number token
    pub fn number_value(&self) -> Option<NumberValue> {
        self.value
    }

    /// The leaf expression for a `Number` or `Constant` token
    pub fn expression(&self) -> Option<Expression> {
        match self.kind {
            TokenKind::Number => self.value.map(Expression::Number),
            TokenKind::Constant => self
                .text
                .chars()
                .next()
                .and_then(Constant::from_glyph)
                .map(Expression::Constant),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            f.write_str(self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_order_is_precedence() {
        assert!(TokenKind::Times < TokenKind::Slash);
        assert!(TokenKind::Slash < TokenKind::ImplicitTimes);
        assert!(TokenKind::ImplicitTimes < TokenKind::Power);
        assert!(TokenKind::Plus < TokenKind::Minus);
        assert!(TokenKind::Equal < TokenKind::Store);
        assert!(TokenKind::Power.has_precedence_over(TokenKind::Slash));
        assert!(!TokenKind::Times.has_precedence_over(TokenKind::Slash));
        // Everything outranks the end of the stream.
        assert!(TokenKind::Equal.has_precedence_over(TokenKind::EndOfStream));
    }

    #[test]
    fn test_number_token_expression() {
        let token = Token::number("42", NumberValue::Integer(42));
        assert_eq!(token.expression(), Some(Expression::integer(42)));
        assert_eq!(token.len(), 2);
    }

    #[test]
    fn test_constant_token_expression() {
        let token = Token::new(TokenKind::Constant, "π");
        assert_eq!(
            token.expression(),
            Some(Expression::Constant(mathexpr_ast::Constant::Pi))
        );
    }

    #[test]
    fn test_structural_token_has_no_expression() {
        let token = Token::new(TokenKind::Plus, "+");
        assert_eq!(token.expression(), None);
    }
}
