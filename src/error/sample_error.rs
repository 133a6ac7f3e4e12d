use crate::error::Error;

/// Represents all errors that can occur while sampling a function over a
/// range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// The range bounds or step are unusable.
    #[error("Invalid range: {details}.")]
    InvalidRange {
        /// Details about why the range is invalid.
        details: String,
    },
    /// The function text was not written as `y = f(x)`.
    #[error("Function must be in the format y = f(x).")]
    MissingFunctionPrefix,
    /// Lexing or evaluating the function failed at one sample point.
    #[error("Error at x = {x}: {error}")]
    AtPoint {
        /// The sample point being evaluated.
        x:     f64,
        /// The failure.
        error: Error,
    },
}
