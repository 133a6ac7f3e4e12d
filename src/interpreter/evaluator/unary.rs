use crate::{
    ast::UnaryOperator,
    interpreter::evaluator::core::{EvalResult, check_finite},
};

/// Evaluates a unary operation on a value.
///
/// # Example
/// ```
/// use plotcalc::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5.0), Ok(-5.0));
/// ```
pub fn eval_unary(op: UnaryOperator, value: f64) -> EvalResult<f64> {
    match op {
        UnaryOperator::Negate => check_finite(-value, || format!("-{value}")),
    }
}
