use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, check_finite},
};

/// Evaluates a binary operation between two values.
///
/// Division and modulo by zero are errors rather than infinities. Modulo is
/// the truncating remainder, so the result takes the sign of the dividend:
/// `-7 % 3` is `-1`. Any other operation whose result is not finite, such as
/// `(-8) ^ 0.5` or `0 ^ -1`, fails with [`RuntimeError::NonFiniteResult`].
///
/// # Example
/// ```
/// use plotcalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
/// assert!(eval_binary(BinaryOperator::Div, 5.0, 0.0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, ImpliedMul, Mod, Mul, Pow, Sub};

    let value = match op {
        Add => left + right,
        Sub => left - right,
        Mul | ImpliedMul => left * right,
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
        Mod => {
            if right == 0.0 {
                return Err(RuntimeError::ModuloByZero);
            }
            left % right
        },
        Pow => left.powf(right),
    };

    check_finite(value, || format!("{left} {op} {right}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_truncates_toward_zero() {
        assert_eq!(eval_binary(BinaryOperator::Mod, 7.0, 3.0), Ok(1.0));
        assert_eq!(eval_binary(BinaryOperator::Mod, -7.0, 3.0), Ok(-1.0));
        assert_eq!(eval_binary(BinaryOperator::Mod, 7.0, -3.0), Ok(1.0));
        assert_eq!(eval_binary(BinaryOperator::Mod, 5.5, 2.0), Ok(1.5));
    }

    #[test]
    fn zero_divisors_are_errors() {
        assert_eq!(eval_binary(BinaryOperator::Div, 5.0, 0.0),
                   Err(RuntimeError::DivisionByZero));
        assert_eq!(eval_binary(BinaryOperator::Mod, 5.0, 0.0),
                   Err(RuntimeError::ModuloByZero));
        assert_eq!(eval_binary(BinaryOperator::Div, 0.0, -0.0),
                   Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn non_real_powers_are_rejected() {
        assert!(matches!(eval_binary(BinaryOperator::Pow, -8.0, 0.5),
                         Err(RuntimeError::NonFiniteResult { .. })));
        assert!(matches!(eval_binary(BinaryOperator::Pow, 0.0, -1.0),
                         Err(RuntimeError::NonFiniteResult { .. })));
    }

    #[test]
    fn implied_multiplication_multiplies() {
        assert_eq!(eval_binary(BinaryOperator::ImpliedMul, 2.0, 5.0), Ok(10.0));
    }
}
