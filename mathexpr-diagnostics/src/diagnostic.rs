//! Core diagnostic types

use crate::location::Span;
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Hint - subtle suggestion for improvement
    Hint,
    /// Information - provides helpful information
    Info,
    /// Warning - may indicate a problem but doesn't prevent parsing
    Warning,
    /// Error - prevents successful parsing
    Error,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

/// Diagnostic error codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCode {
    /// Token that cannot open or continue an expression here
    UnexpectedToken,
    /// A specific delimiter was expected
    ExpectedDelimiter(String),
    /// An operator is missing one of its operands
    MissingOperand,
    /// Two number literals separated only by whitespace
    AdjacentLiterals,
    /// A non-associative operator was chained
    NonAssociativeOperator,
    /// The right-hand side of an assignment is not a valid target
    InvalidAssignmentTarget,
    /// Wrong number of parameters for a function
    InvalidArity,
    /// A function rejected the shape of its parameters
    InvalidArgumentTypes,
    /// Identifier exceeds the maximum symbol name length
    IdentifierTooLong,
    /// A function and its variable share a name
    NameCollision,
    /// A matrix literal with no rows or with ragged rows
    MalformedMatrix,
    /// Expression nesting exceeded the recursion limit
    RecursionLimit,

    /// Custom error with a string code
    Custom(String),
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Severity of the diagnostic
    pub severity: Severity,
    /// Error code
    pub code: DiagnosticCode,
    /// Human-readable message
    pub message: String,
    /// Source span
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, code: DiagnosticCode, message: String, span: Span) -> Self {
        Self {
            severity,
            code,
            message,
            span,
        }
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }

    /// Get the diagnostic code as a string
    pub fn code_string(&self) -> String {
        match &self.code {
            DiagnosticCode::UnexpectedToken => "E001".to_string(),
            DiagnosticCode::ExpectedDelimiter(_) => "E002".to_string(),
            DiagnosticCode::MissingOperand => "E003".to_string(),
            DiagnosticCode::AdjacentLiterals => "E004".to_string(),
            DiagnosticCode::NonAssociativeOperator => "E005".to_string(),
            DiagnosticCode::InvalidAssignmentTarget => "E006".to_string(),
            DiagnosticCode::InvalidArity => "E100".to_string(),
            DiagnosticCode::InvalidArgumentTypes => "E101".to_string(),
            DiagnosticCode::IdentifierTooLong => "E102".to_string(),
            DiagnosticCode::NameCollision => "E103".to_string(),
            DiagnosticCode::MalformedMatrix => "E200".to_string(),
            DiagnosticCode::RecursionLimit => "E201".to_string(),
            DiagnosticCode::Custom(code) => code.clone(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCode::UnexpectedToken => write!(f, "unexpected token"),
            DiagnosticCode::ExpectedDelimiter(d) => write!(f, "expected '{}'", d),
            DiagnosticCode::MissingOperand => write!(f, "missing operand"),
            DiagnosticCode::AdjacentLiterals => write!(f, "adjacent number literals"),
            DiagnosticCode::NonAssociativeOperator => write!(f, "operator is not associative"),
            DiagnosticCode::InvalidAssignmentTarget => write!(f, "invalid assignment target"),
            DiagnosticCode::InvalidArity => write!(f, "invalid number of parameters"),
            DiagnosticCode::InvalidArgumentTypes => write!(f, "invalid parameter types"),
            DiagnosticCode::IdentifierTooLong => write!(f, "identifier too long"),
            DiagnosticCode::NameCollision => write!(f, "name collision"),
            DiagnosticCode::MalformedMatrix => write!(f, "malformed matrix"),
            DiagnosticCode::RecursionLimit => write!(f, "expression too deeply nested"),
            DiagnosticCode::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}",
            self.severity,
            self.code_string(),
            self.message,
            self.span
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diagnostic_creation() {
        let diagnostic = Diagnostic::new(
            Severity::Error,
            DiagnosticCode::UnexpectedToken,
            "unexpected token ')'".to_string(),
            Span::new(3, 4),
        );

        assert!(diagnostic.is_error());
        assert!(!diagnostic.is_warning());
        assert_eq!(diagnostic.code_string(), "E001");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Info > Severity::Hint);
    }

    #[test]
    fn test_code_display() {
        assert_eq!(
            DiagnosticCode::ExpectedDelimiter(")".to_string()).to_string(),
            "expected ')'"
        );
        assert_eq!(DiagnosticCode::RecursionLimit.to_string(), "expression too deeply nested");
    }
}
