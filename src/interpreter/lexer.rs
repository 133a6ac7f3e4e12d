use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    ///
    /// The pattern accepts any run of digits and dots so that a
    /// malformed numeral like `1.2.3` is reported as a whole.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    #[regex(r"\.[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `sin`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Assign,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// Appended by [`lex`] after the last real token.
    EndOfInput,
}

impl Token {
    /// Returns `true` if the token can begin an operand.
    ///
    /// The parser uses this to detect implied multiplication: a token that
    /// starts a value directly after a complete operand, with no operator in
    /// between, multiplies the two.
    ///
    /// # Example
    /// ```
    /// use plotcalc::interpreter::lexer::Token;
    ///
    /// assert!(Token::LParen.starts_operand());
    /// assert!(!Token::Minus.starts_operand());
    /// ```
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_) | Self::LParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Assign => write!(f, "="),
            Self::Ignored => write!(f, " "),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// The error kinds raised by the generated logos lexer.
///
/// These carry no location; [`lex`] turns them into a [`LexError`] with the
/// offending slice and its offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No rule matched the input at this position.
    #[default]
    InvalidCharacter,
    /// A run of digits and dots that is not a valid numeral.
    MalformedNumber,
}

/// A lexed token together with its byte offset in the source.
pub type Spanned = (Token, usize);

/// Converts source text into a sequence of positioned tokens.
///
/// Whitespace is skipped. The returned vector always ends with
/// [`Token::EndOfInput`], positioned at the end of the text, so the parser can
/// tell a premature end apart from a complete statement.
///
/// No tokens are returned on failure: the first invalid character or malformed
/// numeral aborts lexing.
///
/// # Errors
/// Returns a [`LexError`] naming the first offending substring and its offset.
///
/// # Example
/// ```
/// use plotcalc::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("2x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Identifier("x".to_string()), 1),
///                 (Token::EndOfInput, 2)]);
///
/// assert!(lex("1.2.3").is_err());
/// ```
pub fn lex(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexErrorKind::MalformedNumber) => {
                return Err(LexError::MalformedNumber { literal: lexer.slice().to_string(),
                                                       position });
            },
            Err(LexErrorKind::InvalidCharacter) => {
                return Err(LexError::InvalidCharacter { character: lexer.slice().to_string(),
                                                        position });
            },
        }
    }

    tokens.push((Token::EndOfInput, source.len()));
    tracing::debug!(count = tokens.len(), "lexed input");
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexErrorKind::MalformedNumber)`: If the slice has more than one
///   decimal point, is otherwise not a valid float, or is too large to be
///   finite.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    if slice.matches('.').count() > 1 {
        return Err(LexErrorKind::MalformedNumber);
    }
    match slice.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexErrorKind::MalformedNumber),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        lex(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn operators_and_parens_map_to_their_own_tokens() {
        assert_eq!(kinds("+-*/%^()="),
                   vec![Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::Percent,
                        Token::Caret,
                        Token::LParen,
                        Token::RParen,
                        Token::Assign,
                        Token::EndOfInput]);
    }

    #[test]
    fn whitespace_is_skipped_and_positions_are_byte_offsets() {
        let tokens = lex("  x =\t3 ").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("x".to_string()), 2),
                        (Token::Assign, 4),
                        (Token::Number(3.0), 6),
                        (Token::EndOfInput, 8)]);
    }

    #[test]
    fn adjacent_operands_are_not_fused() {
        assert_eq!(kinds("2x(y)"),
                   vec![Token::Number(2.0),
                        Token::Identifier("x".to_string()),
                        Token::LParen,
                        Token::Identifier("y".to_string()),
                        Token::RParen,
                        Token::EndOfInput]);
    }

    #[test]
    fn numerals_with_leading_or_trailing_dot() {
        assert_eq!(kinds(".5"), vec![Token::Number(0.5), Token::EndOfInput]);
        assert_eq!(kinds("2."), vec![Token::Number(2.0), Token::EndOfInput]);
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("7", 7.0)]
    #[case("007", 7.0)]
    #[case("1234567890", 1_234_567_890.0)]
    #[case("2.5", 2.5)]
    #[case("0.1", 0.1)]
    #[case(".25", 0.25)]
    #[case("10.", 10.0)]
    #[case("2.718281828459045", std::f64::consts::E)]
    #[case("3.14159265358979323846264338327950288", std::f64::consts::PI)]
    #[case("123456789012345678901234567890", 123_456_789_012_345_678_901_234_567_890.0)]
    #[case("0.000000000000000000001", 1e-21)]
    fn numerals_round_trip_through_display(#[case] literal: &str, #[case] expected: f64) {
        let tokens = lex(literal).unwrap();
        let [(Token::Number(value), 0), (Token::EndOfInput, _)] = tokens.as_slice() else {
            panic!("`{literal}` did not lex to a single number");
        };
        let value = *value;
        assert_eq!(value, expected);
        assert_eq!(Token::Number(value).to_string().parse::<f64>(), Ok(value));
    }

    #[test]
    fn malformed_numeral_reports_whole_slice() {
        let err = lex("3 + 1.2.3").unwrap_err();
        assert_eq!(err,
                   LexError::MalformedNumber { literal:  "1.2.3".to_string(),
                                               position: 4, });
    }

    #[test]
    fn unknown_character_is_rejected() {
        let err = lex("2 $ 3").unwrap_err();
        assert_eq!(err,
                   LexError::InvalidCharacter { character: "$".to_string(),
                                                position:  2, });
        assert!(lex(".").is_err());
        assert!(lex("1,2").is_err());
    }

    #[test]
    fn empty_input_is_only_end_of_input() {
        assert_eq!(lex("").unwrap(), vec![(Token::EndOfInput, 0)]);
    }
}
