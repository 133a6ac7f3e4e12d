use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, parse_expression, unexpected},
        symbols::SymbolTable,
    },
};

/// Parses and evaluates a single statement.
///
/// A statement is either an assignment, `name = expression`, or a bare
/// expression. The returned root node carries the statement's value in
/// [`Node::value`] and is the parse tree to hand to the visualizer.
///
/// An assignment stores its value in `symbols` only once the whole statement
/// has parsed and evaluated; a failing statement leaves the table untouched.
///
/// # Parameters
/// - `tokens`: The output of [`lex`](crate::interpreter::lexer::lex).
/// - `symbols`: Variable bindings, read by references and written by
///   assignment.
///
/// # Errors
/// Returns a `ParseError` for any syntax error (unexpected or missing tokens,
/// a missing `)`, trailing tokens, a misplaced `=`) and for any evaluation
/// failure (unbound variable, unknown function, wrong arity, division or
/// modulo by zero, a non-finite result).
///
/// # Example
/// ```
/// use plotcalc::interpreter::{lexer::lex, parser::parse_statement, symbols::SymbolTable};
///
/// let mut symbols = SymbolTable::new();
///
/// let tokens = lex("x = 2 + 3 * 4").unwrap();
/// assert_eq!(parse_statement(&tokens, &mut symbols).unwrap().value, 14.0);
///
/// let tokens = lex("2x").unwrap();
/// assert_eq!(parse_statement(&tokens, &mut symbols).unwrap().value, 28.0);
/// ```
pub fn parse_statement(tokens: &[Spanned], symbols: &mut SymbolTable) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();

    let node = if let Some((name, position)) = parse_assignment_target(&mut iter) {
        let value = parse_expression(&mut iter, symbols)?;
        expect_end(&mut iter)?;

        symbols.set(&name, value.value);
        tracing::debug!(%name, value = value.value, "assigned variable");

        let result = value.value;
        Node::new(NodeKind::Assignment { name,
                                         value: Box::new(value) },
                  result,
                  position)
    } else {
        let expr = parse_expression(&mut iter, symbols)?;
        expect_end(&mut iter)?;
        expr
    };

    tracing::trace!(value = node.value, "evaluated statement");
    Ok(node)
}

/// Consumes `IDENTIFIER "="` if the statement starts with it.
///
/// Two tokens of lookahead are needed, so the check runs on a clone of the
/// iterator and only advances the real one on a match.
///
/// # Returns
/// The assigned name and its offset, or `None` if the
/// statement is not an assignment.
fn parse_assignment_target<'a, I>(tokens: &mut Peekable<I>) -> Option<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), position)) = tokens.peek() else {
        return None;
    };
    let (name, position) = (name.clone(), *position);

    let mut lookahead = tokens.clone();
    lookahead.next();
    match lookahead.peek() {
        Some((Token::Assign, _)) => {
            tokens.next();
            tokens.next();
            Some((name, position))
        },
        _ => None,
    }
}

/// Requires that the statement is complete.
///
/// The next token must be the end-of-input marker (or the stream must be
/// exhausted).
fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        None | Some((Token::EndOfInput, _)) => Ok(()),
        Some((tok @ Token::Assign, position)) => Err(unexpected(tok, *position)),
        Some((tok, position)) => Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                                            position: *position, }),
    }
}
