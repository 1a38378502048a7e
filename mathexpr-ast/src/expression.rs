//! Expression tree node definitions

use crate::number::{Constant, NumberValue};
use crate::operator::{BinaryOperator, UnaryOperator};

/// Maximum byte length of a symbol or user-defined function name
pub const MAX_NAME_LEN: usize = 8;

/// Tree representation of a parsed mathematical expression
///
/// Every internal node owns its children; the tree is built bottom-up by
/// the parser and is never mutated afterwards. `Parenthesis` is kept as a
/// real node so pretty-printing stays faithful to what was typed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    /// Numeric literal
    Number(NumberValue),

    /// Single-glyph mathematical constant (π, ℯ, ⅈ)
    Constant(Constant),

    /// Empty placeholder box from the 2D editor
    Empty,

    /// The infinity symbol, as produced by the `inf` identifier
    Infinity {
        /// Sign of the infinity
        negative: bool,
    },

    /// The undefined value, as produced by the `undef` identifier
    Undefined,

    /// A named symbol (variable, sequence reference)
    Symbol(String),

    /// User-defined function application with exactly one argument
    Function {
        /// Function name
        name: String,
        /// The single argument
        argument: Box<Expression>,
    },

    /// Explicit parentheses around a sub-expression
    Parenthesis(Box<Expression>),

    /// Binary operation (arithmetic, power, equality)
    BinaryOp {
        /// The operator
        op: BinaryOperator,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
    },

    /// Unary operation (opposite, factorial)
    UnaryOp {
        /// The operator
        op: UnaryOperator,
        /// The operand
        operand: Box<Expression>,
    },

    /// Assignment of a value into a symbol or function definition
    Store {
        /// The value being stored
        value: Box<Expression>,
        /// The target: a `Symbol`, or a `Function` whose argument is a `Symbol`
        target: Box<Expression>,
    },

    /// Matrix literal with entries in row-major order
    Matrix {
        /// Number of rows (≥ 1)
        rows: usize,
        /// Number of columns (≥ 1, identical for every row)
        columns: usize,
        /// Entries, row-major; `entries.len() == rows * columns`
        entries: Vec<Expression>,
    },

    /// Base-subscripted logarithm, from the `log_{base}(argument)` form
    Logarithm {
        /// The argument
        argument: Box<Expression>,
        /// The base
        base: Box<Expression>,
    },

    /// Reserved (built-in) function call, instantiated via the registry
    FunctionCall {
        /// Function name
        name: String,
        /// Function arguments
        args: Vec<Expression>,
    },
}

impl Expression {
    /// Create a numeric literal from an integer
    pub fn integer(value: i64) -> Self {
        Self::Number(NumberValue::Integer(value))
    }

    /// Create a numeric literal
    pub fn number(value: impl Into<NumberValue>) -> Self {
        Self::Number(value.into())
    }

    /// Create a constant expression
    pub fn constant(constant: Constant) -> Self {
        Self::Constant(constant)
    }

    /// Create a symbol expression
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Create a user-defined function application
    pub fn function(name: impl Into<String>, argument: Expression) -> Self {
        Self::Function {
            name: name.into(),
            argument: Box::new(argument),
        }
    }

    /// Create a parenthesized expression
    pub fn parenthesis(child: Expression) -> Self {
        Self::Parenthesis(Box::new(child))
    }

    /// Create a binary operation expression
    pub fn binary_op(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an addition
    pub fn add(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Add, left, right)
    }

    /// Create a subtraction
    pub fn subtract(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Subtract, left, right)
    }

    /// Create a multiplication
    pub fn multiply(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Multiply, left, right)
    }

    /// Create a division
    pub fn divide(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Divide, left, right)
    }

    /// Create a power
    pub fn power(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Power, left, right)
    }

    /// Create an equality
    pub fn equal(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Equal, left, right)
    }

    /// Create a unary operation expression
    pub fn unary_op(op: UnaryOperator, operand: Expression) -> Self {
        Self::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    /// Create an opposite (unary minus)
    pub fn opposite(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::Negate, operand)
    }

    /// Create a factorial
    pub fn factorial(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::Factorial, operand)
    }

    /// Create a store expression
    pub fn store(value: Expression, target: Expression) -> Self {
        Self::Store {
            value: Box::new(value),
            target: Box::new(target),
        }
    }

    /// Create a matrix expression
    pub fn matrix(rows: usize, columns: usize, entries: Vec<Expression>) -> Self {
        debug_assert_eq!(rows * columns, entries.len());
        Self::Matrix {
            rows,
            columns,
            entries,
        }
    }

    /// Create a base-subscripted logarithm
    pub fn logarithm(argument: Expression, base: Expression) -> Self {
        Self::Logarithm {
            argument: Box::new(argument),
            base: Box::new(base),
        }
    }

    /// Create a reserved function call
    pub fn function_call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Check if this expression is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// Get the symbol name if this is a symbol expression
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Check if this expression is an equality node
    pub fn is_equality(&self) -> bool {
        matches!(
            self,
            Self::BinaryOp {
                op: BinaryOperator::Equal,
                ..
            }
        )
    }

    /// Check if this expression is a valid store target: a bare symbol, or
    /// a single-argument function whose argument is a symbol
    pub fn is_store_target(&self) -> bool {
        match self {
            Self::Symbol(_) => true,
            Self::Function { argument, .. } => argument.is_symbol(),
            _ => false,
        }
    }

    /// Number of direct children of this node
    pub fn child_count(&self) -> usize {
        match self {
            Self::Number(_)
            | Self::Constant(_)
            | Self::Empty
            | Self::Infinity { .. }
            | Self::Undefined
            | Self::Symbol(_) => 0,
            Self::Function { .. } | Self::Parenthesis(_) | Self::UnaryOp { .. } => 1,
            Self::BinaryOp { .. } | Self::Store { .. } | Self::Logarithm { .. } => 2,
            Self::Matrix { entries, .. } => entries.len(),
            Self::FunctionCall { args, .. } => args.len(),
        }
    }
}
