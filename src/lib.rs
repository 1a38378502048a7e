//! A calculator-grade mathematical expression parser
//!
//! `mathexpr` turns one line of calculator input into a typed expression
//! tree suitable for later symbolic reduction, approximation, and
//! pretty-printing. The grammar covers infix arithmetic, exponentiation,
//! unary minus, factorial, parentheses, matrices, parameter lists,
//! numeric and constant literals, reserved and user-defined function
//! calls, sequence references, base-subscripted logarithms, equality, and
//! the store arrow - with calculator-convention implicit multiplication
//! (`1/2x` is `(1/2)·x`, `2x^3` is `2·(x^3)`).
//!
//! # Example
//!
//! ```
//! use mathexpr::{parse, Expression};
//!
//! let tree = parse("2+3*4").unwrap();
//! assert_eq!(
//!     tree,
//!     Expression::add(
//!         Expression::integer(2),
//!         Expression::multiply(Expression::integer(3), Expression::integer(4)),
//!     )
//! );
//! // The printed form re-parses to the identical tree.
//! assert_eq!(parse(&tree.to_string()).unwrap(), tree);
//! ```

#![warn(missing_docs)]

pub use mathexpr_ast::{
    BinaryOperator, Constant, Expression, MAX_NAME_LEN, NumberValue, UnaryOperator, Visitor,
    walk_expression,
};
pub use mathexpr_diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Severity, Span};
pub use mathexpr_parser::{ParseError, ParseResult, Parser, Token, TokenKind, Tokenizer, parse};
pub use mathexpr_registry::{FunctionEntry, find, reserved_functions};
