//! Diagnostic system for mathematical expression parsing errors
//!
//! This crate provides a small diagnostic layer that can turn parse
//! failures into structured, machine-readable reports (error code, span,
//! message) suitable for highlighting in an editor cell.

#![warn(missing_docs)]

pub mod builder;
pub mod diagnostic;
pub mod location;

pub use builder::DiagnosticBuilder;
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use location::Span;
