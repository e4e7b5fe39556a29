use std::fmt;

use crate::{frontend::lexer::token::Token, position::Position};

/// An abstract syntax tree (AST) node.
///
/// `Node` covers every construct the parser can build. Each node owns its
/// children outright, so a parsed program is a strict tree. The source span of
/// a node is derived from its children (see [`Node::start`] and
/// [`Node::end`]); only lists store their span explicitly, because their
/// brackets are not kept as children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An `INT` or `FLOAT` literal.
    Number {
        /// The literal token.
        token: Token,
    },
    /// A `STRING` literal.
    String {
        /// The literal token.
        token: Token,
    },
    /// A bracketed, comma-separated sequence, or a sequence of statements.
    List {
        /// The elements in source order.
        elements: Vec<Self>,
        /// Start of the opening bracket (or of the first statement).
        start:    Position,
        /// End of the closing bracket (or of the last statement).
        end:      Position,
    },
    /// A read of a variable.
    VarAccess {
        /// The `IDENTIFIER` token naming the variable.
        name: Token,
    },
    /// Binds a variable to the value of an expression.
    VarAssign {
        /// The `IDENTIFIER` token naming the variable.
        name:  Token,
        /// The expression whose value is bound.
        value: Box<Self>,
    },
    /// A binary operation such as `a + b` or `x AND y`.
    BinOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token.
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation such as `-x` or `NOT done`.
    UnaryOp {
        /// The operator token.
        op:      Token,
        /// The operand.
        operand: Box<Self>,
    },
}

impl Node {
    /// Where the node starts in the source.
    ///
    /// ## Example
    /// ```
    /// use shork::parse;
    ///
    /// let node = parse("  total = 1 + 2", "<STDIN>").unwrap();
    /// assert_eq!(node.start().column, 2);
    /// assert_eq!(node.end().column, 15);
    /// ```
    #[must_use]
    pub fn start(&self) -> &Position {
        match self {
            Self::Number { token } | Self::String { token } => token.start(),
            Self::VarAccess { name } | Self::VarAssign { name, .. } => name.start(),
            Self::List { start, .. } => start,
            Self::BinOp { left, .. } => left.start(),
            Self::UnaryOp { op, .. } => op.start(),
        }
    }

    /// Where the node ends in the source (exclusive).
    #[must_use]
    pub fn end(&self) -> &Position {
        match self {
            Self::Number { token } | Self::String { token } => token.end(),
            Self::VarAccess { name } => name.end(),
            Self::List { end, .. } => end,
            Self::VarAssign { value, .. } => value.end(),
            Self::BinOp { right, .. } => right.end(),
            Self::UnaryOp { operand, .. } => operand.end(),
        }
    }

    /// The direct child nodes, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Number { .. } | Self::String { .. } | Self::VarAccess { .. } => Vec::new(),
            Self::List { elements, .. } => elements.iter().collect(),
            Self::VarAssign { value, .. } => vec![value.as_ref()],
            Self::BinOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::UnaryOp { operand, .. } => vec![operand.as_ref()],
        }
    }

    /// The source text the node covers.
    #[must_use]
    pub fn source_text(&self) -> &str {
        let start = self.start();
        &start.file_text[start.index..self.end().index]
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { token } | Self::String { token } | Self::VarAccess { name: token } => {
                write!(f, "{token}")
            },
            Self::List { elements, .. } => {
                write!(f, "(LIST: {{")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "}})")
            },
            Self::VarAssign { name, value } => write!(f, "(VAR {} = {value})", name.lexeme()),
            Self::BinOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, operand } => write!(f, "({op} {operand})"),
        }
    }
}
