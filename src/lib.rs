//! # plotcalc
//!
//! plotcalc evaluates arithmetic expressions typed as text. It supports
//! variables and assignment, implied multiplication (`2x`, `3(x + 1)`),
//! the usual operator precedence with a right-associative `^`, and the
//! builtin functions `sin`, `cos`, `tan`, `log` and `exp`.
//!
//! Text goes through the [lexer](interpreter::lexer), then the
//! [parser](interpreter::parser), which builds the parse tree and computes
//! every node's value in one pass while reading and writing a caller-owned
//! [`SymbolTable`]. The tree can be rendered with the
//! [visualizer](interpreter::visualizer), and an expression can be evaluated
//! across a range of `x` values with [`sample`](interpreter::sampling::sample).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed statements.
///
/// This module declares the `Node` type and related operators that represent
/// the syntactic structure of a statement as a tree. Every node carries the
/// value it evaluated to, so the same tree serves the final result and the
/// diagnostic rendering.
pub mod ast;
/// Provides unified error types for lexing, parsing, evaluation and range
/// sampling.
///
/// Lexer errors and parser errors are separate types so callers can report
/// them differently; evaluation errors are raised through the parser tier with
/// the position of the offending token.
pub mod error;
/// Lexing, parsing, evaluation, the symbol table, tree rendering and range
/// sampling.
pub mod interpreter;

pub use crate::{
    ast::Node,
    error::Error,
    interpreter::symbols::SymbolTable,
};
use crate::interpreter::{lexer::lex, parser::parse_statement};

/// Lexes, parses and evaluates one statement against `symbols`.
///
/// Returns the root of the parse tree; its [`Node::value`] is the result. An
/// assignment such as `x = 10` stores its value in `symbols` and yields it.
///
/// # Errors
/// Returns [`Error::Lex`] if the text cannot be tokenized and
/// [`Error::Parse`] if it cannot be parsed or evaluated. A failing statement
/// leaves `symbols` unchanged.
///
/// # Examples
/// ```
/// use plotcalc::{SymbolTable, evaluate};
///
/// let mut symbols = SymbolTable::new();
///
/// assert_eq!(evaluate("x = 10", &mut symbols).unwrap().value, 10.0);
/// assert_eq!(evaluate("x + 1", &mut symbols).unwrap().value, 11.0);
///
/// // 'y' was never assigned.
/// assert!(evaluate("y + 1", &mut symbols).is_err());
/// ```
#[tracing::instrument(skip(symbols))]
pub fn evaluate(source: &str, symbols: &mut SymbolTable) -> Result<Node, Error> {
    let tokens = lex(source)?;
    let tree = parse_statement(&tokens, symbols)?;
    tracing::debug!(value = tree.value, "evaluated");
    Ok(tree)
}
