/// Lookup table and dispatch for built-in functions.
pub mod core;

/// The built-in function implementations.
pub mod builtin;
