use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns the
/// result wrapped in `EvalResult`.
type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - a one-line description,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                about: $about:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A row of the builtin table.
        pub struct BuiltinDef {
            /// The name the function is called by.
            pub name:  &'static str,
            /// A one-line description.
            pub about: &'static str,
            func:      BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, about: $about, func: $func },
            )*
        ];
        /// Names of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin" => { about: "sine of an angle in radians", func: builtin::sin },
    "cos" => { about: "cosine of an angle in radians", func: builtin::cos },
    "tan" => { about: "tangent of an angle in radians", func: builtin::tan },
    "log" => { about: "natural logarithm", func: builtin::log },
    "exp" => { about: "e raised to the argument", func: builtin::exp },
}

/// Returns every builtin in table order.
#[must_use]
pub fn builtins() -> &'static [BuiltinDef] {
    BUILTIN_TABLE
}

/// Returns `true` if `name` is a builtin function.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("exp"));
/// assert!(!is_builtin("foo"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Calls the builtin `name` with already evaluated arguments.
///
/// # Errors
/// - [`RuntimeError::UnknownFunction`] if `name` is not a builtin.
/// - [`RuntimeError::ArgumentCountMismatch`] on the wrong number of arguments.
/// - Any domain error the function itself raises.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::core::call_builtin;
///
/// assert_eq!(call_builtin("exp", &[0.0]), Ok(1.0));
/// assert!(call_builtin("foo", &[1.0]).is_err());
/// ```
pub fn call_builtin(name: &str, args: &[f64]) -> EvalResult<f64> {
    let def = BUILTIN_TABLE.iter()
                           .find(|def| def.name == name)
                           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;
    (def.func)(args)
}
