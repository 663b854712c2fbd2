use std::{fmt, rc::Rc};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: integers, the two booleans, rest-of-line `text` literals, and the
/// `nothing` value produced by empty statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// The absence of a value.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A text literal, everything after the `text` keyword on its line.
    Text(Rc<str>),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nothing"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}

/// An abstract syntax tree node.
///
/// A program is an ordered sequence of nodes; blocks (the bodies of
/// conditionals, loops and procedures) are nested sequences. Nodes are built
/// once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Invocation of a procedure (e.g. `show the x` or `square of 4`).
    Call {
        /// Expression producing the procedure to invoke.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Reference to a binding by name.
    Identifier {
        /// The (possibly multi-word) name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A constant.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// `the <name> is <expression>`.
    Assignment {
        /// The assignment target. Only identifiers are accepted at runtime.
        target: Box<Self>,
        /// The value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if` statement with optional `otherwise` / `otif` branch.
    If {
        /// The condition expression.
        condition:  Box<Self>,
        /// Statements run when the condition is truthy.
        then_block: Vec<Self>,
        /// Statements run otherwise; an `otif` chain is a single nested `If`.
        else_block: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `while` loop with an optional `otherwise` block run on normal exit.
    Loop {
        /// The condition, re-evaluated before each iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Vec<Self>,
        /// Statements run when the condition turns falsy (never after `break`).
        otherwise: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `break`.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `by <name> of <parameter> we mean` followed by an indented body.
    FunctionDef(FunctionDef),
    /// `returns <expression>`.
    Return {
        /// The returned expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// A user-defined procedure definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the procedure, words joined by single spaces.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The body, shared with every closure created from this definition.
    pub body:   Rc<[Node]>,
    /// Line number in the source code.
    pub line:   usize,
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use boomslang::ast::Node;
    ///
    /// let node = Node::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Call { line, .. }
            | Self::Identifier { line, .. }
            | Self::Literal { line, .. }
            | Self::Assignment { line, .. }
            | Self::If { line, .. }
            | Self::Loop { line, .. }
            | Self::Break { line }
            | Self::Return { line, .. }
            | Self::FunctionDef(FunctionDef { line, .. }) => *line,
        }
    }

    /// A short human-readable label of the node kind, used in diagnostics.
    ///
    /// Literals describe themselves by their value.
    ///
    /// ## Example
    /// ```
    /// use boomslang::ast::Node;
    ///
    /// let node = Node::Literal { value: 42.into(),
    ///                            line:  1, };
    /// assert_eq!(node.label(), "42");
    ///
    /// let node = Node::Break { line: 1 };
    /// assert_eq!(node.label(), "break");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Call { .. } => "procedure".to_string(),
            Self::Identifier { .. } => "name".to_string(),
            Self::Literal { value, .. } => value.to_string(),
            Self::Assignment { .. } => "assignment".to_string(),
            Self::If { .. } => "if statement".to_string(),
            Self::Loop { .. } => "while loop".to_string(),
            Self::Break { .. } => "break".to_string(),
            Self::FunctionDef(_) => "procedure definition".to_string(),
            Self::Return { .. } => "return".to_string(),
        }
    }
}
