//! Reserved-function entries and the sorted lookup table

use crate::builders::{build_call, build_derivative, build_logarithm};
use mathexpr_ast::Expression;

/// One reserved-function overload
///
/// A built-in with several accepted arities occupies several adjacent
/// entries in the table, in ascending arity order.
#[derive(Clone, Copy)]
pub struct FunctionEntry {
    name: &'static str,
    arity: usize,
    builder: fn(&str, &[Expression]) -> Option<Expression>,
}

impl FunctionEntry {
    const fn new(
        name: &'static str,
        arity: usize,
        builder: fn(&str, &[Expression]) -> Option<Expression>,
    ) -> Self {
        Self {
            name,
            arity,
            builder,
        }
    }

    /// The function's source-level name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The number of parameters this overload accepts
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Build the expression node for this function
    ///
    /// Returns `None` when the parameters have the wrong shape for this
    /// built-in (the parser reports a type mismatch).
    pub fn build(&self, params: &[Expression]) -> Option<Expression> {
        (self.builder)(self.name, params)
    }
}

impl std::fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// The reserved-function table, sorted by ascending name then arity
static RESERVED_FUNCTIONS: &[FunctionEntry] = &[
    FunctionEntry::new("abs", 1, build_call),
    FunctionEntry::new("acos", 1, build_call),
    FunctionEntry::new("asin", 1, build_call),
    FunctionEntry::new("atan", 1, build_call),
    FunctionEntry::new("binomial", 2, build_call),
    FunctionEntry::new("ceiling", 1, build_call),
    FunctionEntry::new("cos", 1, build_call),
    FunctionEntry::new("cosh", 1, build_call),
    FunctionEntry::new("diff", 3, build_derivative),
    FunctionEntry::new("floor", 1, build_call),
    FunctionEntry::new("frac", 1, build_call),
    FunctionEntry::new("gcd", 2, build_call),
    FunctionEntry::new("lcm", 2, build_call),
    FunctionEntry::new("ln", 1, build_call),
    FunctionEntry::new("log", 1, build_call),
    FunctionEntry::new("log", 2, build_logarithm),
    FunctionEntry::new("permute", 2, build_call),
    FunctionEntry::new("quo", 2, build_call),
    FunctionEntry::new("rem", 2, build_call),
    FunctionEntry::new("root", 2, build_call),
    FunctionEntry::new("round", 1, build_call),
    FunctionEntry::new("round", 2, build_call),
    FunctionEntry::new("sin", 1, build_call),
    FunctionEntry::new("sinh", 1, build_call),
    FunctionEntry::new("sqrt", 1, build_call),
    FunctionEntry::new("tan", 1, build_call),
    FunctionEntry::new("tanh", 1, build_call),
];

/// The full reserved-function table
pub fn reserved_functions() -> &'static [FunctionEntry] {
    RESERVED_FUNCTIONS
}

/// Look up a name in the table
///
/// Walks forward to the first entry whose name is `>=` the query; equality
/// confirms the hit. Returns the index of the first overload, from which
/// the parser advances through same-named entries to resolve arity.
pub fn find(name: &str) -> Option<usize> {
    let mut index = 0;
    while index < RESERVED_FUNCTIONS.len() && RESERVED_FUNCTIONS[index].name() < name {
        index += 1;
    }
    if index < RESERVED_FUNCTIONS.len() && RESERVED_FUNCTIONS[index].name() == name {
        Some(index)
    } else {
        None
    }
}
