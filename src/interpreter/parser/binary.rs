use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node, NodeKind},
    interpreter::{
        evaluator::binary::eval_binary,
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_primary, parse_unary},
        },
        symbols::SymbolTable,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `symbols`: Variable bindings.
///
/// # Returns
/// An evaluated `NodeKind::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, symbols)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens, symbols)?;
            left = binary_node(op, left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`, plus implied
/// multiplication: when a token that starts an operand (a number, an
/// identifier or `(`) directly follows a complete operand, the two are
/// multiplied at the same precedence as `*`. So `2x`, `2(3 + 4)`, `(a)(b)` and
/// `x y` are all products, and `2x^2` is `2 * (x^2)`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%")? unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `symbols`: Variable bindings.
///
/// # Returns
/// An evaluated binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, symbols)?;
    while let Some((token, position)) = tokens.peek() {
        let position = *position;
        let op = match token_to_binary_operator(token) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)) => {
                tokens.next();
                op
            },
            None if token.starts_operand() => BinaryOperator::ImpliedMul,
            _ => break,
        };
        let right = parse_unary(tokens, symbols)?;
        left = binary_node(op, left, right, position)?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// The exponent is parsed at the unary level, so `2 ^ -1` is valid, while a
/// leading minus applies to the whole power: `-2 ^ 2` is `-(2 ^ 2)`.
///
/// The rule is: `exponent := primary ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `symbols`: Variable bindings.
///
/// # Returns
/// An evaluated exponentiation node, or the primary expression alone.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, symbols: &SymbolTable) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, symbols)?;
    if let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let exponent = parse_unary(tokens, symbols)?;
        return binary_node(BinaryOperator::Pow, base, exponent, position);
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents an explicit binary
/// operator (`+`, `-`, `*`, `/`, `%`, `^`). Returns `None` for all other
/// tokens; implied multiplication has no token.
///
/// # Example
/// ```
/// use plotcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Evaluates `left op right` and wraps the operands in a new node.
///
/// Evaluation errors are reported at `position`, the operator's offset (or,
/// for implied multiplication, the offset of the right operand).
fn binary_node(op: BinaryOperator, left: Node, right: Node, position: usize) -> ParseResult<Node> {
    let value = eval_binary(op, left.value, right.value).map_err(|e| e.at(position))?;
    Ok(Node::new(NodeKind::BinaryOp { op,
                                      left: Box::new(left),
                                      right: Box::new(right) },
                 value,
                 position))
}
