//! The precedence-climbing parser
//!
//! A single loop drives the grammar: pop a token, dispatch to the handler
//! for its kind, and keep going while the next effective token outranks
//! the current stopping kind. Binary handlers recurse with a tighter
//! stopping kind for their right-hand side, which is all the precedence
//! machinery there is.
//!
//! The "next effective token" accounts for a one-bit rewrite of the token
//! stream: after any handler that produced a value, if the lookahead
//! could start another value, a `pending_implicit_multiplication` flag is
//! latched and the next pop yields a synthesized `ImplicitTimes` token
//! without consuming input.

use crate::error::{ParseError, ParseResult};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use mathexpr_ast::{Expression, MAX_NAME_LEN};
use mathexpr_registry::{find, reserved_functions};

/// Default bound on expression nesting
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parse a line of calculator input into an expression tree
pub fn parse(input: &str) -> ParseResult<Expression> {
    Parser::new(input).parse()
}

/// Two-token lookahead precedence parser
pub struct Parser<'input> {
    tokenizer: Tokenizer<'input>,
    current_token: Token<'input>,
    next_token: Token<'input>,
    current_token_end: usize,
    next_token_end: usize,
    pending_implicit_multiplication: bool,
    depth: usize,
    max_depth: usize,
}

impl<'input> Parser<'input> {
    /// Create a parser over the given input
    pub fn new(input: &'input str) -> Self {
        let mut tokenizer = Tokenizer::new(input);
        let next_token = tokenizer.pop();
        let next_token_end = tokenizer.position();
        Self {
            tokenizer,
            current_token: Token::end_of_stream(),
            next_token,
            current_token_end: 0,
            next_token_end,
            pending_implicit_multiplication: false,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the recursion bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the whole input into one expression tree
    ///
    /// The first failure aborts the parse; no partial tree escapes.
    pub fn parse(mut self) -> ParseResult<Expression> {
        self.parse_until(TokenKind::EndOfStream)
    }

    // --- Token window -----------------------------------------------------

    fn pop_token(&mut self) {
        if self.pending_implicit_multiplication {
            self.current_token = Token::implicit_times();
            self.pending_implicit_multiplication = false;
        } else {
            self.current_token = self.next_token;
            self.current_token_end = self.next_token_end;
            self.next_token = self.tokenizer.pop();
            self.next_token_end = self.tokenizer.position();
        }
    }

    /// Pop the next token iff it has the given kind
    ///
    /// Only called for structural delimiters (braces, brackets,
    /// parentheses, comma), never for `ImplicitTimes`; no implicit
    /// multiplication can be pending at those points.
    fn pop_token_if_type(&mut self, kind: TokenKind) -> bool {
        debug_assert!(kind != TokenKind::ImplicitTimes);
        debug_assert!(!self.pending_implicit_multiplication);
        let matches = self.next_token.is(kind);
        if matches {
            self.pop_token();
        }
        matches
    }

    fn next_token_has_precedence_over(&self, stopping: TokenKind) -> bool {
        let effective = if self.pending_implicit_multiplication {
            TokenKind::ImplicitTimes
        } else {
            self.next_token.kind()
        };
        effective.has_precedence_over(stopping)
    }

    /// Latch an implicit multiplication when the lookahead could start a
    /// value. Called at the end of every handler that produced one.
    fn check_implicit_multiplication(&mut self) {
        self.pending_implicit_multiplication = matches!(
            self.next_token.kind(),
            TokenKind::Number
                | TokenKind::Constant
                | TokenKind::Identifier
                | TokenKind::LeftParenthesis
                | TokenKind::LeftBracket
        );
    }

    fn current_token_start(&self) -> usize {
        self.current_token_end - self.current_token.len()
    }

    fn next_token_start(&self) -> usize {
        self.next_token_end - self.next_token.len()
    }

    fn unexpected_token_error(&self) -> ParseError {
        ParseError::UnexpectedToken {
            token: self.current_token.to_string(),
            position: self.current_token_start(),
        }
    }

    fn missing_delimiter_error(&self, delimiter: char) -> ParseError {
        ParseError::MissingDelimiter {
            delimiter,
            position: self.next_token_start(),
        }
    }

    // --- The climbing loop ------------------------------------------------

    fn parse_until(&mut self, stopping: TokenKind) -> ParseResult<Expression> {
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep);
        }
        self.depth += 1;
        let result = self.parse_until_inner(stopping);
        self.depth -= 1;
        result
    }

    fn parse_until_inner(&mut self, stopping: TokenKind) -> ParseResult<Expression> {
        self.pop_token();
        let mut left = self.dispatch(None)?;
        while self.next_token_has_precedence_over(stopping) {
            self.pop_token();
            left = self.dispatch(Some(left))?;
        }
        Ok(left)
    }

    /// Route the current token to its handler, growing the left-hand side
    fn dispatch(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        match self.current_token.kind() {
            TokenKind::EndOfStream
            | TokenKind::RightBracket
            | TokenKind::RightParenthesis
            | TokenKind::RightBrace
            | TokenKind::Comma
            | TokenKind::LeftBrace
            | TokenKind::Undefined => self.parse_unexpected(),
            TokenKind::Equal => self.parse_equal(left),
            TokenKind::Store => self.parse_store(left),
            TokenKind::Plus => self.parse_plus(left),
            TokenKind::Minus => self.parse_minus(left),
            TokenKind::Times => self.parse_times(left),
            TokenKind::Slash => self.parse_slash(left),
            TokenKind::ImplicitTimes => self.parse_implicit_times(left),
            TokenKind::Power => self.parse_caret(left),
            TokenKind::Bang => self.parse_bang(left),
            TokenKind::LeftBracket => self.parse_matrix(left),
            TokenKind::LeftParenthesis => self.parse_left_parenthesis(left),
            TokenKind::Empty => self.parse_empty(left),
            TokenKind::Constant => self.parse_constant(left),
            TokenKind::Number => self.parse_number(left),
            TokenKind::Identifier => self.parse_identifier(left),
        }
    }

    // --- Token handlers ---------------------------------------------------

    fn parse_unexpected(&mut self) -> ParseResult<Expression> {
        Err(self.unexpected_token_error())
    }

    fn parse_number(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        if left.is_some() {
            return Err(self.unexpected_token_error());
        }
        let expression = self
            .current_token
            .expression()
            .ok_or_else(|| self.unexpected_token_error())?;
        if self.next_token.is(TokenKind::Number) {
            // No implicit multiplication between two numbers.
            return Err(ParseError::AdjacentNumbers);
        }
        self.check_implicit_multiplication();
        Ok(expression)
    }

    fn parse_constant(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        if left.is_some() {
            return Err(self.unexpected_token_error());
        }
        let expression = self
            .current_token
            .expression()
            .ok_or_else(|| self.unexpected_token_error())?;
        self.check_implicit_multiplication();
        Ok(expression)
    }

    fn parse_empty(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        if left.is_some() {
            return Err(self.unexpected_token_error());
        }
        Ok(Expression::Empty)
    }

    fn parse_binary_operator(
        &mut self,
        left: Option<Expression>,
        stopping: TokenKind,
    ) -> ParseResult<(Expression, Expression)> {
        let left = left.ok_or(ParseError::MissingOperand)?;
        let right = self.parse_until(stopping)?;
        Ok((left, right))
    }

    fn parse_plus(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        let (left, right) = self.parse_binary_operator(left, TokenKind::Plus)?;
        Ok(Expression::add(left, right))
    }

    fn parse_minus(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        match left {
            None => {
                let right = self.parse_until(TokenKind::Slash)?;
                Ok(Expression::opposite(right))
            }
            Some(left) => {
                // Subtraction is left-associative.
                let right = self.parse_until(TokenKind::Minus)?;
                Ok(Expression::subtract(left, right))
            }
        }
    }

    fn parse_times(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        let (left, right) = self.parse_binary_operator(left, TokenKind::Times)?;
        Ok(Expression::multiply(left, right))
    }

    /// Division's right-hand side stops at `ImplicitTimes` so that a
    /// juxtaposition after the denominator stays outside: `1/2x` reads
    /// `(1/2)·x`.
    fn parse_slash(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        let (left, right) = self.parse_binary_operator(left, TokenKind::ImplicitTimes)?;
        Ok(Expression::divide(left, right))
    }

    /// Implicit multiplication stops at `Slash`, not `Times`, so that
    /// `a b/c` reads `(a·b)/c`.
    fn parse_implicit_times(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        let (left, right) = self.parse_binary_operator(left, TokenKind::Slash)?;
        Ok(Expression::multiply(left, right))
    }

    /// `^` stops at `ImplicitTimes`: `a^b^c` right-associates while
    /// `a^b c` reads `(a^b)·c`.
    fn parse_caret(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        let (left, right) = self.parse_binary_operator(left, TokenKind::ImplicitTimes)?;
        Ok(Expression::power(left, right))
    }

    fn parse_equal(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        if left.as_ref().is_some_and(Expression::is_equality) {
            return Err(ParseError::EqualNotAssociative);
        }
        let (left, right) = self.parse_binary_operator(left, TokenKind::Equal)?;
        Ok(Expression::equal(left, right))
    }

    fn parse_store(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        let value = left.ok_or(ParseError::MissingOperand)?;
        self.pop_token();
        let name = self.current_token.text();
        if !self.current_token.is(TokenKind::Identifier)
            || find(name).is_some()
            || is_special_identifier(name)
        {
            return Err(ParseError::StoreTargetInvalid);
        }
        let target = self.parse_custom_identifier(name)?;
        if !self.next_token.is(TokenKind::EndOfStream) || !target.is_store_target() {
            return Err(ParseError::StoreTargetInvalid);
        }
        Ok(Expression::store(value, target))
    }

    fn parse_bang(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        let left = left.ok_or(ParseError::MissingOperand)?;
        let expression = Expression::factorial(left);
        self.check_implicit_multiplication();
        Ok(expression)
    }

    fn parse_left_parenthesis(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        if left.is_some() {
            return Err(self.unexpected_token_error());
        }
        let inner = self.parse_until(TokenKind::RightParenthesis)?;
        if !self.pop_token_if_type(TokenKind::RightParenthesis) {
            return Err(self.missing_delimiter_error(')'));
        }
        let expression = Expression::parenthesis(inner);
        self.check_implicit_multiplication();
        Ok(expression)
    }

    // --- Matrices ---------------------------------------------------------

    fn parse_matrix(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        if left.is_some() {
            return Err(self.unexpected_token_error());
        }
        let mut entries: Vec<Expression> = Vec::new();
        let mut rows = 0;
        let mut columns = 0;
        while !self.pop_token_if_type(TokenKind::RightBracket) {
            let row = self.parse_vector()?;
            if rows == 0 {
                columns = row.len();
                if columns == 0 {
                    return Err(ParseError::EmptyMatrix);
                }
            } else if row.len() != columns {
                return Err(ParseError::RaggedMatrix);
            }
            entries.extend(row);
            rows += 1;
        }
        if rows == 0 {
            return Err(ParseError::EmptyMatrix);
        }
        let expression = Expression::matrix(rows, columns, entries);
        self.check_implicit_multiplication();
        Ok(expression)
    }

    fn parse_vector(&mut self) -> ParseResult<Vec<Expression>> {
        if !self.pop_token_if_type(TokenKind::LeftBracket) {
            return Err(self.missing_delimiter_error('['));
        }
        let list = self.parse_comma_separated_list()?;
        if !self.pop_token_if_type(TokenKind::RightBracket) {
            return Err(self.missing_delimiter_error(']'));
        }
        Ok(list)
    }

    fn parse_comma_separated_list(&mut self) -> ParseResult<Vec<Expression>> {
        let mut list = Vec::new();
        loop {
            list.push(self.parse_until(TokenKind::Comma)?);
            if !self.pop_token_if_type(TokenKind::Comma) {
                return Ok(list);
            }
        }
    }

    // --- Identifiers ------------------------------------------------------

    fn parse_identifier(&mut self, left: Option<Expression>) -> ParseResult<Expression> {
        if left.is_some() {
            return Err(self.unexpected_token_error());
        }
        let name = self.current_token.text();
        let expression = if let Some(index) = find(name) {
            self.parse_reserved_function(index)?
        } else if is_special_identifier(name) {
            self.parse_special_identifier(name)?
        } else {
            self.parse_custom_identifier(name)?
        };
        self.check_implicit_multiplication();
        Ok(expression)
    }

    /// Resolve a reserved call against the registry's overload walk:
    /// advance through same-named entries while the parameter count
    /// exceeds the entry's arity.
    fn parse_reserved_function(&mut self, mut index: usize) -> ParseResult<Expression> {
        let entries = reserved_functions();
        let name = entries[index].name();
        let params = self.parse_function_parameters()?;
        while params.len() > entries[index].arity() {
            index += 1;
            if index >= entries.len() || entries[index].name() != name {
                return Err(ParseError::ReservedArityMismatch {
                    name: name.to_string(),
                    expected: entries[index - 1].arity(),
                    actual: params.len(),
                });
            }
        }
        if params.len() < entries[index].arity() {
            return Err(ParseError::ReservedArityMismatch {
                name: name.to_string(),
                expected: entries[index].arity(),
                actual: params.len(),
            });
        }
        entries[index]
            .build(&params)
            .ok_or_else(|| ParseError::ReservedTypeMismatch {
                name: name.to_string(),
            })
    }

    fn parse_special_identifier(&mut self, name: &str) -> ParseResult<Expression> {
        match name {
            "inf" => Ok(Expression::Infinity { negative: false }),
            "undef" => Ok(Expression::Undefined),
            "u_" | "v_" => self.parse_sequence(name, TokenKind::LeftBrace, TokenKind::RightBrace),
            "u" | "v" => self.parse_sequence(
                name,
                TokenKind::LeftParenthesis,
                TokenKind::RightParenthesis,
            ),
            "log_" => self.parse_subscripted_logarithm(),
            _ => Err(self.unexpected_token_error()),
        }
    }

    /// Sequence references accept exactly the ranks `n` and `n+1` and
    /// collapse to symbols (`u(n)`, `u(n+1)`) for the sequence store.
    fn parse_sequence(
        &mut self,
        name: &str,
        left_delimiter: TokenKind,
        right_delimiter: TokenKind,
    ) -> ParseResult<Expression> {
        let sequence = &name[..1];
        if !self.pop_token_if_type(left_delimiter) {
            return Err(self.missing_delimiter_error(delimiter_char(left_delimiter)));
        }
        let rank = self.parse_until(right_delimiter)?;
        if !self.pop_token_if_type(right_delimiter) {
            return Err(self.missing_delimiter_error(delimiter_char(right_delimiter)));
        }
        if rank == Expression::symbol("n") {
            Ok(Expression::symbol(format!("{}(n)", sequence)))
        } else if rank == Expression::add(Expression::symbol("n"), Expression::integer(1)) {
            Ok(Expression::symbol(format!("{}(n+1)", sequence)))
        } else {
            Err(ParseError::ReservedTypeMismatch {
                name: sequence.to_string(),
            })
        }
    }

    fn parse_subscripted_logarithm(&mut self) -> ParseResult<Expression> {
        if !self.pop_token_if_type(TokenKind::LeftBrace) {
            return Err(self.missing_delimiter_error('{'));
        }
        let base = self.parse_until(TokenKind::RightBrace)?;
        if !self.pop_token_if_type(TokenKind::RightBrace) {
            return Err(self.missing_delimiter_error('}'));
        }
        let params = self.parse_function_parameters()?;
        let count = params.len();
        let mut params = params.into_iter();
        match (params.next(), params.next()) {
            (Some(argument), None) => Ok(Expression::logarithm(argument, base)),
            _ => Err(ParseError::ReservedArityMismatch {
                name: "log".to_string(),
                expected: 1,
                actual: count,
            }),
        }
    }

    fn parse_custom_identifier(&mut self, name: &str) -> ParseResult<Expression> {
        if name.len() >= MAX_NAME_LEN {
            return Err(ParseError::IdentifierTooLong {
                name: name.to_string(),
            });
        }
        if !self.pop_token_if_type(TokenKind::LeftParenthesis) {
            return Ok(Expression::symbol(name));
        }
        let params = self.parse_comma_separated_list()?;
        let count = params.len();
        let mut params = params.into_iter();
        let parameter = match (params.next(), params.next()) {
            (Some(parameter), None) => parameter,
            _ => {
                return Err(ParseError::ReservedArityMismatch {
                    name: name.to_string(),
                    expected: 1,
                    actual: count,
                });
            }
        };
        // A function and its variable must have distinct names; the check
        // is a prefix comparison, not equality.
        if parameter
            .as_symbol()
            .is_some_and(|symbol| symbol.as_bytes().starts_with(name.as_bytes()))
        {
            return Err(ParseError::FunctionVariableCollision {
                name: name.to_string(),
            });
        }
        if !self.pop_token_if_type(TokenKind::RightParenthesis) {
            return Err(self.missing_delimiter_error(')'));
        }
        Ok(Expression::function(name, parameter))
    }

    fn parse_function_parameters(&mut self) -> ParseResult<Vec<Expression>> {
        if !self.pop_token_if_type(TokenKind::LeftParenthesis) {
            return Err(self.missing_delimiter_error('('));
        }
        if self.pop_token_if_type(TokenKind::RightParenthesis) {
            return Ok(Vec::new());
        }
        let list = self.parse_comma_separated_list()?;
        if !self.pop_token_if_type(TokenKind::RightParenthesis) {
            return Err(self.missing_delimiter_error(')'));
        }
        Ok(list)
    }
}

/// The closed set of identifiers with bespoke parsing rules
fn is_special_identifier(name: &str) -> bool {
    matches!(name, "inf" | "undef" | "u_" | "v_" | "u" | "v" | "log_")
}

fn delimiter_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::LeftParenthesis => '(',
        TokenKind::RightParenthesis => ')',
        TokenKind::LeftBracket => '[',
        TokenKind::RightBracket => ']',
        TokenKind::LeftBrace => '{',
        _ => '}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathexpr_ast::NumberValue;
    use pretty_assertions::assert_eq;

    fn sym(name: &str) -> Expression {
        Expression::symbol(name)
    }

    fn int(value: i64) -> Expression {
        Expression::integer(value)
    }

    #[test]
    fn test_parse_leaves() {
        assert_eq!(parse("42"), Ok(int(42)));
        assert_eq!(parse("x"), Ok(sym("x")));
        assert_eq!(
            parse("π"),
            Ok(Expression::Constant(mathexpr_ast::Constant::Pi))
        );
        assert_eq!(parse("inf"), Ok(Expression::Infinity { negative: false }));
        assert_eq!(parse("undef"), Ok(Expression::Undefined));
    }

    #[test]
    fn test_parse_decimal_value() {
        match parse("3.14") {
            Ok(Expression::Number(NumberValue::Decimal(value))) => {
                assert_eq!(value.to_string(), "3.14");
            }
            other => panic!("expected decimal literal, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_precedence() {
        assert_eq!(
            parse("2+3*4"),
            Ok(Expression::add(
                int(2),
                Expression::multiply(int(3), int(4))
            ))
        );
        assert_eq!(
            parse("2*3+4"),
            Ok(Expression::add(
                Expression::multiply(int(2), int(3)),
                int(4)
            ))
        );
    }

    #[test]
    fn test_subtraction_and_division_left_associate() {
        assert_eq!(
            parse("a-b-c"),
            Ok(Expression::subtract(
                Expression::subtract(sym("a"), sym("b")),
                sym("c")
            ))
        );
        assert_eq!(
            parse("a/b/c"),
            Ok(Expression::divide(
                Expression::divide(sym("a"), sym("b")),
                sym("c")
            ))
        );
    }

    #[test]
    fn test_power_right_associates() {
        assert_eq!(
            parse("a^b^c"),
            Ok(Expression::power(
                sym("a"),
                Expression::power(sym("b"), sym("c"))
            ))
        );
    }

    #[test]
    fn test_unary_minus_binds_between_slash_and_power() {
        // -2^2 keeps the power inside the opposite.
        assert_eq!(
            parse("-2^2"),
            Ok(Expression::opposite(Expression::power(int(2), int(2))))
        );
        // -2/3 keeps the opposite on the numerator alone.
        assert_eq!(
            parse("-2/3"),
            Ok(Expression::divide(Expression::opposite(int(2)), int(3)))
        );
        // Explicit multiplication is looser than the opposite's operand.
        assert_eq!(
            parse("-2*x"),
            Ok(Expression::multiply(Expression::opposite(int(2)), sym("x")))
        );
        // Implicit multiplication is tighter and is captured by it.
        assert_eq!(
            parse("-2x"),
            Ok(Expression::opposite(Expression::multiply(
                int(2),
                sym("x")
            )))
        );
    }

    #[test]
    fn test_implicit_multiplication_binds_between_slash_and_power() {
        assert_eq!(
            parse("1/2x"),
            Ok(Expression::multiply(
                Expression::divide(int(1), int(2)),
                sym("x")
            ))
        );
        assert_eq!(
            parse("2x^3"),
            Ok(Expression::multiply(
                int(2),
                Expression::power(sym("x"), int(3))
            ))
        );
        // Juxtaposition chains right-associate through the latch.
        assert_eq!(
            parse("a b c"),
            Ok(Expression::multiply(
                sym("a"),
                Expression::multiply(sym("b"), sym("c"))
            ))
        );
        // a b / c reads (a·b)/c.
        assert_eq!(
            parse("a b/c"),
            Ok(Expression::divide(
                Expression::multiply(sym("a"), sym("b")),
                sym("c")
            ))
        );
        // a^b c reads (a^b)·c.
        assert_eq!(
            parse("a^b c"),
            Ok(Expression::multiply(
                Expression::power(sym("a"), sym("b")),
                sym("c")
            ))
        );
    }

    #[test]
    fn test_explicit_times_lets_slash_climb() {
        assert_eq!(
            parse("a*b/c"),
            Ok(Expression::multiply(
                sym("a"),
                Expression::divide(sym("b"), sym("c"))
            ))
        );
    }

    #[test]
    fn test_juxtaposition_after_denominator_stays_outside() {
        assert_eq!(
            parse("a/b c"),
            Ok(Expression::multiply(
                Expression::divide(sym("a"), sym("b")),
                sym("c")
            ))
        );
    }

    #[test]
    fn test_parentheses_are_preserved() {
        assert_eq!(
            parse("(a+b)*c"),
            Ok(Expression::multiply(
                Expression::parenthesis(Expression::add(sym("a"), sym("b"))),
                sym("c")
            ))
        );
    }

    #[test]
    fn test_factorial_and_implicit() {
        assert_eq!(parse("a!"), Ok(Expression::factorial(sym("a"))));
        assert_eq!(
            parse("a!b"),
            Ok(Expression::multiply(
                Expression::factorial(sym("a")),
                sym("b")
            ))
        );
        // a^2! is a^(2!).
        assert_eq!(
            parse("a^2!"),
            Ok(Expression::power(
                sym("a"),
                Expression::factorial(int(2))
            ))
        );
    }

    #[test]
    fn test_adjacent_numbers_fail() {
        assert_eq!(parse("2 3"), Err(ParseError::AdjacentNumbers));
    }

    #[test]
    fn test_equal_is_not_associative() {
        assert_eq!(
            parse("a=b"),
            Ok(Expression::equal(sym("a"), sym("b")))
        );
        assert_eq!(parse("a=b=c"), Err(ParseError::EqualNotAssociative));
        // The second '=' of '==' has no left-hand side at all.
        assert_eq!(parse("2==3"), Err(ParseError::MissingOperand));
    }

    #[test]
    fn test_store() {
        assert_eq!(
            parse("x+1→g"),
            Ok(Expression::store(
                Expression::add(sym("x"), int(1)),
                sym("g")
            ))
        );
        assert_eq!(
            parse("2→f(x)"),
            Ok(Expression::store(
                int(2),
                Expression::function("f", sym("x"))
            ))
        );
    }

    #[test]
    fn test_store_rejects_bad_targets() {
        // Reserved and special identifiers are not assignable.
        assert_eq!(parse("2→cos"), Err(ParseError::StoreTargetInvalid));
        assert_eq!(parse("2→inf"), Err(ParseError::StoreTargetInvalid));
        assert_eq!(parse("2→u"), Err(ParseError::StoreTargetInvalid));
        // The target must end the input.
        assert_eq!(parse("2→g+1"), Err(ParseError::StoreTargetInvalid));
        // The target must be a symbol or function-on-symbol.
        assert_eq!(parse("2→f(2)"), Err(ParseError::StoreTargetInvalid));
        assert_eq!(parse("2→2"), Err(ParseError::StoreTargetInvalid));
        // A store needs a value on its left.
        assert_eq!(parse("→g"), Err(ParseError::MissingOperand));
    }

    #[test]
    fn test_matrices() {
        assert_eq!(
            parse("[[1,2][3,4]]"),
            Ok(Expression::matrix(
                2,
                2,
                vec![int(1), int(2), int(3), int(4)]
            ))
        );
        assert_eq!(parse("[[1]]"), Ok(Expression::matrix(1, 1, vec![int(1)])));
        assert_eq!(parse("[]"), Err(ParseError::EmptyMatrix));
        assert_eq!(parse("[[1,2][3]]"), Err(ParseError::RaggedMatrix));
    }

    #[test]
    fn test_matrix_implicit_multiplication() {
        assert_eq!(
            parse("[[1]]x"),
            Ok(Expression::multiply(
                Expression::matrix(1, 1, vec![int(1)]),
                sym("x")
            ))
        );
    }

    #[test]
    fn test_reserved_functions() {
        assert_eq!(
            parse("cos(x)"),
            Ok(Expression::function_call("cos", vec![sym("x")]))
        );
        assert_eq!(
            parse("root(x,3)"),
            Ok(Expression::function_call("root", vec![sym("x"), int(3)]))
        );
        // Overload resolution walks to the two-parameter entry.
        assert_eq!(
            parse("round(x,2)"),
            Ok(Expression::function_call("round", vec![sym("x"), int(2)]))
        );
        assert_eq!(
            parse("log(8,2)"),
            Ok(Expression::logarithm(int(8), int(2)))
        );
    }

    #[test]
    fn test_reserved_function_arity_errors() {
        assert_eq!(
            parse("cos(x,y)"),
            Err(ParseError::ReservedArityMismatch {
                name: "cos".to_string(),
                expected: 1,
                actual: 2,
            })
        );
        assert_eq!(
            parse("root(x)"),
            Err(ParseError::ReservedArityMismatch {
                name: "root".to_string(),
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            parse("log(x,y,z)"),
            Err(ParseError::ReservedArityMismatch {
                name: "log".to_string(),
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_reserved_function_type_mismatch() {
        assert_eq!(
            parse("diff(f(x),2,0)"),
            Err(ParseError::ReservedTypeMismatch {
                name: "diff".to_string(),
            })
        );
        assert!(parse("diff(f(x),x,0)").is_ok());
    }

    #[test]
    fn test_sequences() {
        assert_eq!(parse("u_{n}"), Ok(sym("u(n)")));
        assert_eq!(parse("u_{n+1}"), Ok(sym("u(n+1)")));
        assert_eq!(parse("v(n)"), Ok(sym("v(n)")));
        assert_eq!(parse("v(n+1)"), Ok(sym("v(n+1)")));
        assert_eq!(
            parse("u_{n+2}"),
            Err(ParseError::ReservedTypeMismatch {
                name: "u".to_string(),
            })
        );
        // A bare sequence name has no rank.
        assert!(matches!(
            parse("u"),
            Err(ParseError::MissingDelimiter { delimiter: '(', .. })
        ));
    }

    #[test]
    fn test_subscripted_logarithm() {
        assert_eq!(
            parse("log_{2}(8)"),
            Ok(Expression::logarithm(int(8), int(2)))
        );
        assert!(matches!(
            parse("log_{2}8"),
            Err(ParseError::MissingDelimiter { delimiter: '(', .. })
        ));
        assert!(matches!(
            parse("log_2(8)"),
            Err(ParseError::MissingDelimiter { delimiter: '{', .. })
        ));
    }

    #[test]
    fn test_custom_functions() {
        assert_eq!(
            parse("f(x)"),
            Ok(Expression::function("f", sym("x")))
        );
        assert_eq!(
            parse("f(x+1)"),
            Ok(Expression::function(
                "f",
                Expression::add(sym("x"), int(1))
            ))
        );
    }

    #[test]
    fn test_function_variable_collision_is_a_prefix_check() {
        assert_eq!(
            parse("f(f)"),
            Err(ParseError::FunctionVariableCollision {
                name: "f".to_string(),
            })
        );
        assert_eq!(
            parse("f(fx)"),
            Err(ParseError::FunctionVariableCollision {
                name: "f".to_string(),
            })
        );
        assert!(parse("f(g)").is_ok());
    }

    #[test]
    fn test_identifier_too_long() {
        assert_eq!(
            parse("abcdefgh"),
            Err(ParseError::IdentifierTooLong {
                name: "abcdefgh".to_string(),
            })
        );
        assert!(parse("abcdefg").is_ok());
    }

    #[test]
    fn test_unexpected_tokens() {
        assert!(matches!(
            parse(""),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse(")"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse("2)"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse("#"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse("2+"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_missing_closing_parenthesis() {
        assert!(matches!(
            parse("(1+2"),
            Err(ParseError::MissingDelimiter { delimiter: ')', .. })
        ));
    }

    #[test]
    fn test_recursion_bound() {
        let input = "(".repeat(64) + "x" + &")".repeat(64);
        assert_eq!(
            Parser::new(&input).with_max_depth(16).parse(),
            Err(ParseError::TooDeep)
        );
        assert!(Parser::new(&input).parse().is_ok());
    }

    #[test]
    fn test_parse_is_deterministic() {
        for input in ["2+3*4", "1/2x", "cos(x)+sin(y)", "[[1,2][3,4]]"] {
            assert_eq!(parse(input), parse(input));
        }
    }
}
