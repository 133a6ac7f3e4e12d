/// Shared parser types and the expression entry point.
pub mod core;

/// Statement parsing.
///
/// Recognizes the top-level `name = expression` assignment form, writes the
/// symbol table, and rejects trailing tokens.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative (including implied
/// multiplication) and exponent precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, numbers, variables, function calls and parenthesized
/// groups.
pub mod unary;

pub use statement::parse_statement;
