//! Numeric literal values and mathematical constants

use rust_decimal::Decimal;
use std::fmt;

/// Value of a numeric literal
///
/// Integers take the fast `i64` path; anything with a fractional part is
/// kept as a [`Decimal`] so the printed form preserves the source digits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberValue {
    /// Integer literal (e.g. 42, 123)
    Integer(i64),
    /// Decimal literal (e.g. 3.14, 0.5)
    Decimal(Decimal),
}

impl NumberValue {
    /// Check whether this value is the integer literal `1`
    ///
    /// Used for sequence-rank recognition (`u_{n+1}`), which accepts the
    /// literal `1` only - `1.0` is a different literal and is rejected.
    pub fn is_one(&self) -> bool {
        matches!(self, NumberValue::Integer(1))
    }

    /// Check whether this value is the integer literal `0`
    pub fn is_zero(&self) -> bool {
        matches!(self, NumberValue::Integer(0))
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberValue::Integer(value) => write!(f, "{}", value),
            NumberValue::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        NumberValue::Integer(value)
    }
}

impl From<Decimal> for NumberValue {
    fn from(value: Decimal) -> Self {
        NumberValue::Decimal(value)
    }
}

/// A single-glyph mathematical constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constant {
    /// The circle constant π (U+03C0)
    Pi,
    /// Euler's number ℯ (U+212F)
    E,
    /// The imaginary unit ⅈ (U+2148)
    I,
}

impl Constant {
    /// The glyph the calculator keyboard emits for this constant
    pub const fn glyph(&self) -> char {
        match self {
            Constant::Pi => 'π',
            Constant::E => 'ℯ',
            Constant::I => 'ⅈ',
        }
    }

    /// Look up a constant from its glyph
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'π' => Some(Constant::Pi),
            'ℯ' => Some(Constant::E),
            'ⅈ' => Some(Constant::I),
            _ => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
