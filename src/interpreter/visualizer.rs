use std::fmt;

use crate::ast::{BinaryOperator, Node, NodeKind};

/// Indentation added for each level of the tree.
pub const INDENT_STEP: &str = "  ";

/// Renders a parse tree as indented text, one node per line.
///
/// Every line starts with `indent` followed by [`INDENT_STEP`] once per level
/// of depth, then the node's label and the value the node evaluated to.
/// Children follow their parent in source order. The output depends only on
/// the tree, so rendering the same tree twice gives the same string.
///
/// # Example
/// ```
/// use plotcalc::interpreter::{
///     lexer::lex, parser::parse_statement, symbols::SymbolTable, visualizer::visualize,
/// };
///
/// let mut symbols = SymbolTable::new();
/// let tree = parse_statement(&lex("2 + 3 * 4").unwrap(), &mut symbols).unwrap();
///
/// assert_eq!(visualize(&tree, ""),
///            "BinaryOp + = 14\n\
///             \x20 Number 2\n\
///             \x20 BinaryOp * = 12\n\
///             \x20   Number 3\n\
///             \x20   Number 4\n");
/// ```
#[must_use]
pub fn visualize(tree: &Node, indent: &str) -> String {
    Indented { node: tree,
               indent }.to_string()
}

struct Indented<'a> {
    node:   &'a Node,
    indent: &'a str,
}

impl fmt::Display for Indented<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.node, self.indent)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: &str) -> fmt::Result {
    let value = node.value;
    write!(f, "{indent}")?;
    match &node.kind {
        NodeKind::Number => writeln!(f, "Number {value}")?,
        NodeKind::Variable { name } => writeln!(f, "Variable {name} = {value}")?,
        NodeKind::Assignment { name, .. } => writeln!(f, "Assignment {name} = {value}")?,
        NodeKind::UnaryOp { op, .. } => writeln!(f, "UnaryOp {op} = {value}")?,
        NodeKind::BinaryOp { op: BinaryOperator::ImpliedMul,
                             .. } => writeln!(f, "BinaryOp * (implied) = {value}")?,
        NodeKind::BinaryOp { op, .. } => writeln!(f, "BinaryOp {op} = {value}")?,
        NodeKind::FunctionCall { name, .. } => writeln!(f, "FunctionCall {name} = {value}")?,
    }

    let child_indent = format!("{indent}{INDENT_STEP}");
    for child in node.children() {
        write_node(f, child, &child_indent)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::lex, parser::parse_statement, symbols::SymbolTable};

    fn tree(source: &str, symbols: &mut SymbolTable) -> Node {
        parse_statement(&lex(source).unwrap(), symbols).unwrap()
    }

    #[test]
    fn assignment_with_call_and_implied_multiplication() {
        let mut symbols = SymbolTable::new();
        symbols.set("x", 2.0);
        let node = tree("y = -2x + sin(0)", &mut symbols);

        assert_eq!(visualize(&node, ""),
                   "Assignment y = -4\n  \
                    BinaryOp + = -4\n    \
                    BinaryOp * (implied) = -4\n      \
                    UnaryOp - = -2\n        \
                    Number 2\n      \
                    Variable x = 2\n    \
                    FunctionCall sin = 0\n      \
                    Number 0\n");
    }

    #[test]
    fn indent_prefixes_every_line() {
        let mut symbols = SymbolTable::new();
        let node = tree("(1)", &mut symbols);
        assert_eq!(visualize(&node, "> "), "> Number 1\n");

        let node = tree("-pi", &mut symbols);
        let rendered = visualize(&node, "| ");
        assert!(rendered.lines().all(|line| line.starts_with("| ")));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut symbols = SymbolTable::new();
        let node = tree("2^3^2 % 7 / (1 - 3)", &mut symbols);
        assert_eq!(visualize(&node, ""), visualize(&node, ""));
        assert_eq!(node.to_string(), visualize(&node, ""));
    }
}
