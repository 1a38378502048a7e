//! Operator definitions for expression tree nodes

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (explicit or by juxtaposition)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (^), right-associative
    Power,
    /// Equality (=), non-associative
    Equal,
}

impl BinaryOperator {
    /// The operator's source glyph
    pub const fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
            BinaryOperator::Equal => "=",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOperator {
    /// Unary minus (prefix)
    Negate,
    /// Factorial (postfix !)
    Factorial,
}

impl UnaryOperator {
    /// The operator's source glyph
    pub const fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Factorial => "!",
        }
    }
}
