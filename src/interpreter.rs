/// The evaluator module computes the value of each operation.
///
/// The parser calls into the evaluator as soon as a node's operands are
/// known, so values are computed in the same pass that builds the tree.
///
/// # Responsibilities
/// - Applies unary and binary operators, including implied multiplication.
/// - Dispatches calls to the builtin functions and checks their arity.
/// - Reports runtime errors such as division by zero or non-finite results.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each paired with its byte offset: numbers, identifiers, operators,
/// parentheses and `=`, followed by an end-of-input marker.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Reports lexical errors for invalid characters or malformed numerals.
pub mod lexer;
/// The parser module builds and evaluates the parse tree from tokens.
///
/// A recursive-descent parser over the token sequence. Each parsing function
/// returns a node already annotated with its value, and a top-level
/// assignment writes its result into the symbol table.
///
/// # Responsibilities
/// - Applies operator precedence and associativity.
/// - Inserts implied multiplication between adjacent operands.
/// - Distinguishes function calls from variable references by lookahead.
/// - Reports syntax and evaluation errors with the offending position.
pub mod parser;
/// Repeated evaluation of one expression across a range of `x` values.
///
/// Produces the `(x, y)` points used for plotting a function.
pub mod sampling;
/// The variable store shared by successive evaluations.
pub mod symbols;
/// Text rendering of parse trees for diagnostics.
pub mod visualizer;
