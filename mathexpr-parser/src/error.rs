//! Parser error types

use mathexpr_diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse failure kinds
///
/// The set is flat: the first error aborts the parse and the partial tree
/// is discarded, so no error ever wraps another.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that cannot open or continue an expression here
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The offending token text
        token: String,
        /// Byte offset where the token was found
        position: usize,
    },

    /// A binary or unary operator found its operand missing
    #[error("operator is missing an operand")]
    MissingOperand,

    /// An expected closing delimiter was not found
    #[error("expected '{delimiter}' at position {position}")]
    MissingDelimiter {
        /// The delimiter that was expected
        delimiter: char,
        /// Byte offset where it was expected
        position: usize,
    },

    /// Two number literals separated only by whitespace
    #[error("two number literals in a row")]
    AdjacentNumbers,

    /// `=` appeared nested inside another `=`
    #[error("'=' cannot be chained")]
    EqualNotAssociative,

    /// The right-hand side of `→` is not a symbol or single-argument
    /// function on a symbol, or tokens remain after the target
    #[error("store target must be a symbol or a single-argument function")]
    StoreTargetInvalid,

    /// Wrong number of parameters for a function
    #[error("function '{name}' expects {expected} parameter(s), got {actual}")]
    ReservedArityMismatch {
        /// Function name
        name: String,
        /// The arity that failed to match
        expected: usize,
        /// The number of parameters provided
        actual: usize,
    },

    /// A reserved-function builder rejected the shape of its parameters
    #[error("function '{name}' rejected its parameters")]
    ReservedTypeMismatch {
        /// Function name
        name: String,
    },

    /// Identifier exceeds the maximum symbol name length
    #[error("identifier '{name}' is too long")]
    IdentifierTooLong {
        /// The offending identifier
        name: String,
    },

    /// A user-defined function and its variable share a name prefix
    #[error("function '{name}' and its variable must have distinct names")]
    FunctionVariableCollision {
        /// Function name
        name: String,
    },

    /// A matrix literal with no rows
    #[error("matrix has no rows")]
    EmptyMatrix,

    /// A matrix literal whose rows have different lengths
    #[error("matrix rows have different lengths")]
    RaggedMatrix,

    /// Expression nesting exceeded the recursion limit
    #[error("expression is too deeply nested")]
    TooDeep,
}

impl ParseError {
    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = match self {
            ParseError::UnexpectedToken { token, position } => {
                DiagnosticBuilder::unexpected_token(token).at_offset(*position)
            }
            ParseError::MissingOperand => DiagnosticBuilder::error(DiagnosticCode::MissingOperand),
            ParseError::MissingDelimiter {
                delimiter,
                position,
            } => DiagnosticBuilder::expected_delimiter(*delimiter).at_offset(*position),
            ParseError::AdjacentNumbers => {
                DiagnosticBuilder::error(DiagnosticCode::AdjacentLiterals)
            }
            ParseError::EqualNotAssociative => {
                DiagnosticBuilder::error(DiagnosticCode::NonAssociativeOperator)
            }
            ParseError::StoreTargetInvalid => {
                DiagnosticBuilder::error(DiagnosticCode::InvalidAssignmentTarget)
            }
            ParseError::ReservedArityMismatch {
                name,
                expected,
                actual,
            } => DiagnosticBuilder::invalid_arity(name, *expected, *actual),
            ParseError::ReservedTypeMismatch { .. } => {
                DiagnosticBuilder::error(DiagnosticCode::InvalidArgumentTypes)
            }
            ParseError::IdentifierTooLong { .. } => {
                DiagnosticBuilder::error(DiagnosticCode::IdentifierTooLong)
            }
            ParseError::FunctionVariableCollision { name } => {
                DiagnosticBuilder::name_collision(name)
            }
            ParseError::EmptyMatrix | ParseError::RaggedMatrix => {
                DiagnosticBuilder::error(DiagnosticCode::MalformedMatrix)
            }
            ParseError::TooDeep => DiagnosticBuilder::error(DiagnosticCode::RecursionLimit),
        };
        let mut diagnostic = builder.build();
        if diagnostic.message.is_empty() {
            diagnostic.message = self.to_string();
        }
        diagnostic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_diagnostic_carries_position() {
        let error = ParseError::MissingDelimiter {
            delimiter: ')',
            position: 7,
        };
        let diagnostic = error.to_diagnostic();
        assert!(diagnostic.is_error());
        assert_eq!(diagnostic.code_string(), "E002");
        assert_eq!(diagnostic.span.start, 7);
    }

    #[test]
    fn test_to_diagnostic_fills_message() {
        let diagnostic = ParseError::AdjacentNumbers.to_diagnostic();
        assert_eq!(diagnostic.message, "two number literals in a row");
    }
}
