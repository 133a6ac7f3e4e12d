use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive, symbols::SymbolTable},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy. Every node is evaluated as soon
/// as its children are, reading variables from `symbols`.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `symbols`: Variable bindings to resolve identifiers against.
///
/// # Returns
/// The parsed expression node, annotated with its value.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, symbols)
}

/// Builds the error for a token that cannot appear where it was found.
///
/// `=` gets its own error since assignment is only valid at the very start of
/// a statement, and the end-of-input marker is reported as a premature end.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, position: usize) -> ParseError {
    match token {
        Token::EndOfInput => ParseError::UnexpectedEndOfInput { position },
        Token::Assign => ParseError::MisplacedAssignment { position },
        tok => ParseError::UnexpectedToken { token: tok.to_string(),
                                             position },
    }
}
