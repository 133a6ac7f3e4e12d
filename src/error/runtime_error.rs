use crate::error::ParseError;

/// Represents all errors that can occur while computing a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a variable that has no binding.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not built in.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' expects {expected} argument(s) but got {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Attempted modulo by zero.
    #[error("Modulo by zero.")]
    ModuloByZero,
    /// An argument lies outside the domain of a function.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// An operation produced NaN or an infinity.
    #[error("Result is not a finite number: {details}.")]
    NonFiniteResult {
        /// The operation that overflowed or left the real domain.
        details: String,
    },
}

impl RuntimeError {
    /// Attaches the position of the offending token, lifting the error into
    /// the parser tier.
    #[must_use]
    pub fn at(self, position: usize) -> ParseError {
        ParseError::Evaluation { error: self,
                                 position }
    }
}
