/// A node of the parse tree, annotated with the value it evaluated to.
///
/// The parser computes values while it builds the tree, so every node carries
/// the number its subtree produced. The root node's `value` is the result of
/// the whole statement. Nodes own their children and are never modified once
/// built.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The syntactic construct.
    pub kind:     NodeKind,
    /// The value this subtree evaluated to.
    pub value:    f64,
    /// Byte offset in the source of the token that introduced the node.
    pub position: usize,
}

impl Node {
    /// Creates a node from its kind, computed value and source position.
    #[must_use]
    pub const fn new(kind: NodeKind, value: f64, position: usize) -> Self {
        Self { kind,
               value,
               position }
    }

    /// Returns the direct children of the node in source order.
    ///
    /// ## Example
    /// ```
    /// use plotcalc::ast::{Node, NodeKind, UnaryOperator};
    ///
    /// let two = Node::new(NodeKind::Number, 2.0, 1);
    /// let neg = Node::new(NodeKind::UnaryOp { op:      UnaryOperator::Negate,
    ///                                         operand: Box::new(two), },
    ///                     -2.0,
    ///                     0);
    ///
    /// assert_eq!(neg.children().len(), 1);
    /// ```
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match &self.kind {
            NodeKind::Number | NodeKind::Variable { .. } => Vec::new(),
            NodeKind::Assignment { value, .. } => vec![&**value],
            NodeKind::UnaryOp { operand, .. } => vec![&**operand],
            NodeKind::BinaryOp { left, right, .. } => vec![&**left, &**right],
            NodeKind::FunctionCall { arguments, .. } => arguments.iter().collect(),
        }
    }
}

/// The constructs a statement is built from.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A numeric literal; the number itself is the node's value.
    Number,
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A top-level `name = expression` statement.
    Assignment {
        /// The variable being bound.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Node>,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Node>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// Call of a built-in function (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Node>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Multiplication implied by adjacency, as in `2x` or `(a)(b)`.
    ImpliedMul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul | Self::ImpliedMul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
