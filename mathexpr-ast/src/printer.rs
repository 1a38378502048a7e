//! Pretty-printer producing re-parseable calculator notation
//!
//! The printer guarantees that feeding its output back through the parser
//! rebuilds the identical tree for every tree the parser can produce.
//! Grouping is never invented: parentheses appear only for `Parenthesis`
//! nodes. Instead, a multiplication is written as juxtaposition exactly
//! when the grammar would read the juxtaposed form back as that same
//! multiplication, and as explicit `*` otherwise.

use crate::expression::Expression;
use crate::number::{Constant, NumberValue};
use crate::operator::{BinaryOperator, UnaryOperator};
use crate::visitor::Visitor;
use std::fmt;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer { out: f }.visit_expression(self)
    }
}

struct Printer<'a, 'b> {
    out: &'a mut fmt::Formatter<'b>,
}

impl Visitor for Printer<'_, '_> {
    type Result = fmt::Result;

    fn visit_number(&mut self, value: &NumberValue) -> fmt::Result {
        write!(self.out, "{}", value)
    }

    fn visit_constant(&mut self, constant: &Constant) -> fmt::Result {
        write!(self.out, "{}", constant.glyph())
    }

    fn visit_empty(&mut self) -> fmt::Result {
        write!(self.out, "□")
    }

    fn visit_infinity(&mut self, negative: bool) -> fmt::Result {
        if negative {
            write!(self.out, "-inf")
        } else {
            write!(self.out, "inf")
        }
    }

    fn visit_undefined(&mut self) -> fmt::Result {
        write!(self.out, "undef")
    }

    fn visit_symbol(&mut self, name: &str) -> fmt::Result {
        write!(self.out, "{}", name)
    }

    fn visit_function(&mut self, name: &str, argument: &Expression) -> fmt::Result {
        write!(self.out, "{}(", name)?;
        self.visit_expression(argument)?;
        write!(self.out, ")")
    }

    fn visit_parenthesis(&mut self, child: &Expression) -> fmt::Result {
        write!(self.out, "(")?;
        self.visit_expression(child)?;
        write!(self.out, ")")
    }

    fn visit_binary_op(
        &mut self,
        op: &BinaryOperator,
        left: &Expression,
        right: &Expression,
    ) -> fmt::Result {
        self.visit_expression(left)?;
        if *op == BinaryOperator::Multiply && reads_back_implicitly(left, right) {
            write!(self.out, " ")?;
        } else {
            write!(self.out, "{}", op.symbol())?;
        }
        self.visit_expression(right)
    }

    fn visit_unary_op(&mut self, op: &UnaryOperator, operand: &Expression) -> fmt::Result {
        match op {
            UnaryOperator::Negate => {
                write!(self.out, "-")?;
                self.visit_expression(operand)
            }
            UnaryOperator::Factorial => {
                self.visit_expression(operand)?;
                write!(self.out, "!")
            }
        }
    }

    fn visit_store(&mut self, value: &Expression, target: &Expression) -> fmt::Result {
        self.visit_expression(value)?;
        write!(self.out, "→")?;
        self.visit_expression(target)
    }

    fn visit_matrix(&mut self, rows: usize, columns: usize, entries: &[Expression]) -> fmt::Result {
        write!(self.out, "[")?;
        for row in 0..rows {
            write!(self.out, "[")?;
            for column in 0..columns {
                if column > 0 {
                    write!(self.out, ",")?;
                }
                self.visit_expression(&entries[row * columns + column])?;
            }
            write!(self.out, "]")?;
        }
        write!(self.out, "]")
    }

    fn visit_logarithm(&mut self, argument: &Expression, base: &Expression) -> fmt::Result {
        write!(self.out, "log_{{")?;
        self.visit_expression(base)?;
        write!(self.out, "}}(")?;
        self.visit_expression(argument)?;
        write!(self.out, ")")
    }

    fn visit_function_call(&mut self, name: &str, args: &[Expression]) -> fmt::Result {
        write!(self.out, "{}(", name)?;
        for (index, arg) in args.iter().enumerate() {
            if index > 0 {
                write!(self.out, ",")?;
            }
            self.visit_expression(arg)?;
        }
        write!(self.out, ")")
    }
}

/// Whether `left · right` written as juxtaposition re-parses as this exact
/// multiplication node.
///
/// Three things can break the reading: a left operand whose own top node
/// is a multiplication or an opposite (re-parsing would regroup it), a
/// right operand that does not bind tightly enough to survive the
/// implicit-multiplication stopping point, and a digit-digit boundary
/// (two adjacent number literals are a parse error).
fn reads_back_implicitly(left: &Expression, right: &Expression) -> bool {
    if matches!(
        left,
        Expression::BinaryOp {
            op: BinaryOperator::Multiply,
            ..
        } | Expression::UnaryOp {
            op: UnaryOperator::Negate,
            ..
        }
    ) {
        return false;
    }
    if ends_with_digit(left) && starts_with_digit(right) {
        return false;
    }
    binds_tightly(right)
}

/// Whether an expression binds at least as tightly as the right-hand side
/// of an implicit multiplication.
fn binds_tightly(expr: &Expression) -> bool {
    match expr {
        Expression::Number(_)
        | Expression::Constant(_)
        | Expression::Infinity { .. }
        | Expression::Undefined
        | Expression::Symbol(_)
        | Expression::Function { .. }
        | Expression::Parenthesis(_)
        | Expression::Matrix { .. }
        | Expression::Logarithm { .. }
        | Expression::FunctionCall { .. } => true,
        Expression::BinaryOp {
            op: BinaryOperator::Power,
            ..
        } => true,
        Expression::UnaryOp {
            op: UnaryOperator::Factorial,
            ..
        } => true,
        Expression::BinaryOp {
            op: BinaryOperator::Multiply,
            left,
            right,
        } => reads_back_implicitly(left, right),
        _ => false,
    }
}

/// Whether the printed form of an expression ends with an ASCII digit
fn ends_with_digit(expr: &Expression) -> bool {
    match expr {
        Expression::Number(_) => true,
        Expression::Symbol(name) => name.ends_with(|c: char| c.is_ascii_digit()),
        Expression::BinaryOp { right, .. } => ends_with_digit(right),
        Expression::UnaryOp {
            op: UnaryOperator::Negate,
            operand,
        } => ends_with_digit(operand),
        Expression::Store { target, .. } => ends_with_digit(target),
        _ => false,
    }
}

/// Whether the printed form of an expression starts with an ASCII digit
fn starts_with_digit(expr: &Expression) -> bool {
    match expr {
        Expression::Number(_) => true,
        Expression::BinaryOp { left, .. } => starts_with_digit(left),
        Expression::UnaryOp {
            op: UnaryOperator::Factorial,
            operand,
        } => starts_with_digit(operand),
        Expression::Store { value, .. } => starts_with_digit(value),
        _ => false,
    }
}
