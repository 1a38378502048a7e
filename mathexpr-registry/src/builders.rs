//! Builder callbacks for the reserved-function table
//!
//! Builders are pure constructors: they receive the already-parsed
//! parameter list, perform shape checks only, and never simplify.
//! Returning `None` signals a parameter-type rejection to the parser.

use mathexpr_ast::Expression;

/// Default builder: wrap the parameters in a `FunctionCall` node.
pub(crate) fn build_call(name: &str, params: &[Expression]) -> Option<Expression> {
    Some(Expression::function_call(name, params.to_vec()))
}

/// `log(x, b)` builds the same node as the subscripted `log_{b}(x)` form.
pub(crate) fn build_logarithm(_name: &str, params: &[Expression]) -> Option<Expression> {
    let [argument, base] = params else {
        return None;
    };
    Some(Expression::logarithm(argument.clone(), base.clone()))
}

/// `diff(f, x, x0)`: the differentiation variable must be a bare symbol.
pub(crate) fn build_derivative(name: &str, params: &[Expression]) -> Option<Expression> {
    if !params.get(1)?.is_symbol() {
        return None;
    }
    Some(Expression::function_call(name, params.to_vec()))
}
