/// Lexing errors.
///
/// Defines the errors the lexer reports for text that cannot be tokenized:
/// unrecognized characters and malformed numerals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence.
/// Parse errors include syntax mistakes, unexpected tokens, a missing closing
/// parenthesis, and evaluation faults tagged with their source position.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a value, such
/// as division by zero, unbound variables or calls to unknown functions.
pub mod runtime_error;
/// Range sampling errors.
///
/// Errors raised while validating a sampling range or evaluating a function
/// across it.
pub mod sample_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use sample_error::SampleError;

/// Any failure of the lex-then-parse pipeline for a single statement.
///
/// The two variants keep the two error tiers apart so a caller can label them
/// differently. The message of the wrapped error is part of this error's own
/// message, so neither variant reports it again as a source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text could not be tokenized.
    #[error("Lexer error: {0}")]
    Lex(LexError),
    /// The tokens could not be parsed or evaluated.
    #[error("Parser error: {0}")]
    Parse(ParseError),
}

impl Error {
    /// Returns the byte offset in the statement the error points at.
    ///
    /// # Example
    /// ```
    /// use plotcalc::{SymbolTable, evaluate};
    ///
    /// let err = evaluate("1 + foo", &mut SymbolTable::new()).unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}
