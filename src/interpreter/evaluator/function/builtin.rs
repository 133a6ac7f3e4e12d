use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, check_finite},
};

/// Checks that a builtin received exactly `expected` arguments.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::builtin::check_arity;
///
/// assert!(check_arity("sin", &[1.0], 1).is_ok());
/// assert!(check_arity("sin", &[], 1).is_err());
/// ```
pub fn check_arity(name: &str, args: &[f64], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found: args.len() })
    }
}

/// Generates a single-argument builtin that forwards to the `f64` method of
/// the same purpose.
///
/// The generated function checks its arity and rejects non-finite results.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::PI / 2.0]).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, 1)?;

            let x = args[0];
            check_finite(x.$real_fn(), || format!("{}({x})", stringify!($fname)))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(exp, exp);

/// Natural logarithm.
///
/// The argument must be strictly positive.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::builtin::log;
///
/// assert!((log(&[std::f64::consts::E]).unwrap() - 1.0).abs() < 1e-12);
/// assert!(log(&[0.0]).is_err());
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    check_arity("log", args, 1)?;

    let x = args[0];
    if x <= 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("log is only defined for positive numbers, but found {x}") });
    }
    check_finite(x.ln(), || format!("log({x})"))
}
