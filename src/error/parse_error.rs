use crate::error::RuntimeError;

/// Represents all errors that can occur while parsing and evaluating a
/// statement.
///
/// Syntax errors and evaluation errors share this type: the parser computes
/// values while it builds the tree, so a failed computation is reported the
/// same way as a failed parse, with the position of the token that caused it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after a complete statement.
    #[error("Error at position {position}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
    /// An `=` appeared somewhere other than directly after a leading
    /// identifier.
    #[error("Error at position {position}: Assignment is only allowed as `name = expression`.")]
    MisplacedAssignment {
        /// Byte offset of the `=` token.
        position: usize,
    },
    /// Computing the value of a node failed.
    #[error("Error at position {position}: {error}")]
    Evaluation {
        /// What went wrong.
        error:    RuntimeError,
        /// Byte offset of the token that produced the failing node.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::MisplacedAssignment { position }
            | Self::Evaluation { position, .. } => *position,
        }
    }
}
