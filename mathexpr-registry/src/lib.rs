//! Reserved-function registry for the mathexpr parser
//!
//! The registry is a process-wide, immutable table of the calculator's
//! built-in functions. Parsers look identifiers up here to decide between
//! a reserved call, a special identifier, and a user-defined symbol.
//!
//! # Table contract
//!
//! The table is sorted by ascending function name. A variadic built-in is
//! represented by several adjacent entries sharing the same name, in
//! ascending arity order; overload resolution is a linear walk forward
//! from the first entry with a matching name. Both properties are locked
//! by tests.

#![warn(missing_docs)]

mod builders;
mod function;

pub use function::{FunctionEntry, find, reserved_functions};
