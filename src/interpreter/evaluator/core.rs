use crate::error::RuntimeError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Rejects NaN and infinite results.
///
/// `details` is only rendered when the value is rejected, so callers can
/// describe the operation without paying for formatting on the happy path.
/// Negative zero is returned as `0`, so `0 * -1` does not print as `-0`.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::core::check_finite;
///
/// assert_eq!(check_finite(2.0, || "1 + 1".to_string()), Ok(2.0));
/// assert!(check_finite(f64::INFINITY, || "exp(1000)".to_string()).is_err());
/// assert!(check_finite(-0.0, || "-0".to_string()).unwrap().is_sign_positive());
/// ```
pub fn check_finite(value: f64, details: impl FnOnce() -> String) -> EvalResult<f64> {
    if value == 0.0 {
        Ok(0.0)
    } else if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::NonFiniteResult { details: details() })
    }
}
