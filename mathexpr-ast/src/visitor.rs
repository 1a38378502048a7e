//! Visitor pattern for expression tree traversal

use crate::expression::Expression;
use crate::number::{Constant, NumberValue};
use crate::operator::{BinaryOperator, UnaryOperator};

/// Trait for visiting expression tree nodes
pub trait Visitor: Sized {
    /// The result type of visiting a node
    type Result;

    /// Visit an expression node
    fn visit_expression(&mut self, expr: &Expression) -> Self::Result {
        walk_expression(self, expr)
    }

    /// Visit a numeric literal
    fn visit_number(&mut self, _value: &NumberValue) -> Self::Result;

    /// Visit a constant
    fn visit_constant(&mut self, _constant: &Constant) -> Self::Result;

    /// Visit an empty placeholder
    fn visit_empty(&mut self) -> Self::Result;

    /// Visit an infinity leaf
    fn visit_infinity(&mut self, _negative: bool) -> Self::Result;

    /// Visit the undefined leaf
    fn visit_undefined(&mut self) -> Self::Result;

    /// Visit a symbol
    fn visit_symbol(&mut self, _name: &str) -> Self::Result;

    /// Visit a user-defined function application
    fn visit_function(&mut self, _name: &str, _argument: &Expression) -> Self::Result;

    /// Visit a parenthesized expression
    fn visit_parenthesis(&mut self, _child: &Expression) -> Self::Result;

    /// Visit a binary operation
    fn visit_binary_op(
        &mut self,
        _op: &BinaryOperator,
        _left: &Expression,
        _right: &Expression,
    ) -> Self::Result;

    /// Visit a unary operation
    fn visit_unary_op(&mut self, _op: &UnaryOperator, _operand: &Expression) -> Self::Result;

    /// Visit a store expression
    fn visit_store(&mut self, _value: &Expression, _target: &Expression) -> Self::Result;

    /// Visit a matrix literal
    fn visit_matrix(
        &mut self,
        _rows: usize,
        _columns: usize,
        _entries: &[Expression],
    ) -> Self::Result;

    /// Visit a base-subscripted logarithm
    fn visit_logarithm(&mut self, _argument: &Expression, _base: &Expression) -> Self::Result;

    /// Visit a reserved function call
    fn visit_function_call(&mut self, _name: &str, _args: &[Expression]) -> Self::Result;
}

/// Default implementation of walking an expression tree
pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) -> V::Result {
    match expr {
        Expression::Number(value) => visitor.visit_number(value),
        Expression::Constant(constant) => visitor.visit_constant(constant),
        Expression::Empty => visitor.visit_empty(),
        Expression::Infinity { negative } => visitor.visit_infinity(*negative),
        Expression::Undefined => visitor.visit_undefined(),
        Expression::Symbol(name) => visitor.visit_symbol(name),
        Expression::Function { name, argument } => visitor.visit_function(name, argument),
        Expression::Parenthesis(child) => visitor.visit_parenthesis(child),
        Expression::BinaryOp { op, left, right } => visitor.visit_binary_op(op, left, right),
        Expression::UnaryOp { op, operand } => visitor.visit_unary_op(op, operand),
        Expression::Store { value, target } => visitor.visit_store(value, target),
        Expression::Matrix {
            rows,
            columns,
            entries,
        } => visitor.visit_matrix(*rows, *columns, entries),
        Expression::Logarithm { argument, base } => visitor.visit_logarithm(argument, base),
        Expression::FunctionCall { name, args } => visitor.visit_function_call(name, args),
    }
}
