//! Expression tree definitions for calculator mathematical expressions
//!
//! This crate provides the core tree types used to represent parsed
//! mathematical expressions. It is designed to be lightweight with minimal
//! dependencies; the parser builds these trees, and downstream passes
//! (reduction, approximation, layout) consume them.

#![warn(missing_docs)]

mod expression;
mod number;
mod operator;
mod printer;
mod visitor;

pub use expression::*;
pub use number::*;
pub use operator::*;
pub use visitor::*;
