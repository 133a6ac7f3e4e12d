/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not begin any token.
    #[error("Error at position {position}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: String,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A run of digits and decimal points that is not a valid number, such as
    /// `1.2.3`.
    #[error("Error at position {position}: Malformed number '{literal}'.")]
    MalformedNumber {
        /// The full offending numeral.
        literal:  String,
        /// Byte offset of the numeral in the source.
        position: usize,
    },
}

impl LexError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::MalformedNumber { position, .. } => *position,
        }
    }
}
