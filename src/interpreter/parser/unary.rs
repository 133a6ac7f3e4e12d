use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind, UnaryOperator},
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            function::core::{call_builtin, is_builtin},
            unary::eval_unary,
        },
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression, unexpected},
        },
        symbols::SymbolTable,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative, so `--x` is parsed as `-(-x)`, and it binds looser than
/// `^`: `-2^2` is `-(2^2)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `symbols`: Variable bindings.
///
/// # Returns
/// An evaluated [`NodeKind::UnaryOp`] or the exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let operand = parse_unary(tokens, symbols)?;
        let op = UnaryOperator::Negate;
        let value = eval_unary(op, operand.value).map_err(|e| e.at(position))?;
        Ok(Node::new(NodeKind::UnaryOp { op,
                                         operand: Box::new(operand) },
                     value,
                     position))
    } else {
        parse_exponent(tokens, symbols)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - variable references
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER "(" expression? ")"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `symbols`: Variable bindings.
///
/// # Returns
/// The evaluated primary [`Node`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: 0 });
    };
    let position = *position;

    match token {
        Token::Number(n) => Ok(Node::new(NodeKind::Number, *n, position)),
        Token::LParen => parse_grouping(tokens, symbols, position),
        Token::Identifier(name) => parse_identifier_or_function(tokens, symbols, name, position),
        tok => Err(unexpected(tok, position)),
    }
}

/// Parses the rest of a parenthesized expression.
///
/// The opening parenthesis has already been consumed; `open` is its offset
/// and is reported if the closing parenthesis is missing.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         symbols: &SymbolTable,
                         open: usize)
                         -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, symbols)?;
    expect_closing_paren(tokens, open)?;
    Ok(expr)
}

/// Consumes the `)` matching the parenthesis at `open`.
fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((Token::Assign, position)) => Err(ParseError::MisplacedAssignment { position: *position }),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}

/// Parses an identifier that has already been consumed as either a function
/// call or a variable reference.
///
/// One token of lookahead decides: an identifier directly followed by `(` is
/// a call to a builtin, anything else is a variable looked up in `symbols`.
/// The function name is checked before its argument is parsed, so `foo(1)`
/// fails on `foo` itself. A statement-level assignment never reaches this
/// point, so an identifier followed by `=` here is a misplaced assignment,
/// whether or not the name is bound.
///
/// # Errors
/// - `MisplacedAssignment` if the identifier is followed by `=`.
/// - `UnknownFunction` if a called name is not a builtin.
/// - `ArgumentCountMismatch` for a call like `sin()`.
/// - `UnknownVariable` if a referenced variable is unbound.
/// - `ExpectedClosingParen` if the argument list is not closed.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       symbols: &SymbolTable,
                                       name: &str,
                                       position: usize)
                                       -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let open = match tokens.peek() {
        Some((Token::LParen, open)) => *open,
        Some((Token::Assign, eq)) => return Err(ParseError::MisplacedAssignment { position: *eq }),
        _ => {
            let value = symbols.get(name).map_err(|e| e.at(position))?;
            return Ok(Node::new(NodeKind::Variable { name: name.to_string() }, value, position));
        },
    };

    if !is_builtin(name) {
        return Err(RuntimeError::UnknownFunction { name: name.to_string() }.at(position));
    }
    tokens.next();

    let mut arguments = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
    } else {
        arguments.push(parse_expression(tokens, symbols)?);
        expect_closing_paren(tokens, open)?;
    }

    let values: Vec<f64> = arguments.iter().map(|arg| arg.value).collect();
    let value = call_builtin(name, &values).map_err(|e| e.at(position))?;

    Ok(Node::new(NodeKind::FunctionCall { name: name.to_string(),
                                          arguments },
                 value,
                 position))
}
