//! Builder pattern for constructing diagnostics

use crate::diagnostic::{Diagnostic, DiagnosticCode, Severity};
use crate::location::Span;

/// Builder for constructing diagnostics fluently
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    severity: Severity,
    code: DiagnosticCode,
    message: String,
    span: Option<Span>,
}

impl DiagnosticBuilder {
    /// Create a new error diagnostic builder
    pub fn error(code: DiagnosticCode) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: String::new(),
            span: None,
        }
    }

    /// Create a new warning diagnostic builder
    pub fn warning(code: DiagnosticCode) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: String::new(),
            span: None,
        }
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set a zero-length span at a byte offset
    pub fn at_offset(self, offset: usize) -> Self {
        self.with_span(Span::at(offset))
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            severity: self.severity,
            code: self.code,
            message: self.message,
            span: self.span.unwrap_or_default(),
        }
    }
}

// Convenience constructors for common diagnostics

impl DiagnosticBuilder {
    /// Create an "unexpected token" error
    pub fn unexpected_token(token: &str) -> Self {
        Self::error(DiagnosticCode::UnexpectedToken)
            .with_message(format!("unexpected token '{}'", token))
    }

    /// Create an "expected delimiter" error
    pub fn expected_delimiter(delimiter: char) -> Self {
        Self::error(DiagnosticCode::ExpectedDelimiter(delimiter.to_string()))
            .with_message(format!("expected '{}'", delimiter))
    }

    /// Create an "invalid arity" error
    pub fn invalid_arity(name: &str, expected: usize, actual: usize) -> Self {
        Self::error(DiagnosticCode::InvalidArity).with_message(format!(
            "function '{}' expects {} parameter(s), got {}",
            name, expected, actual
        ))
    }

    /// Create a "name collision" error
    pub fn name_collision(name: &str) -> Self {
        Self::error(DiagnosticCode::NameCollision).with_message(format!(
            "function '{}' and its variable must have distinct names",
            name
        ))
    }
}
