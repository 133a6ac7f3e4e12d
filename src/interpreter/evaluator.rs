/// Core evaluation types and checks.
///
/// Contains the evaluator's result type and the finiteness guard every
/// operation passes its result through.
pub mod core;

/// Unary operator evaluation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including the zero-divisor checks for
/// division and modulo.
pub mod binary;

/// Built-in functions.
///
/// The fixed table of single-argument functions that may be called by name,
/// together with their lookup and arity checking.
pub mod function;
