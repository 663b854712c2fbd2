use std::rc::Rc;

use crate::{ast::LiteralValue, interpreter::value::function::Function};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable and cheap to clone; text and procedure bodies are
/// reference counted. Errors and control signals are not values: they travel
/// through [`Unwind`](crate::error::Unwind) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value, displayed as `nothing`.
    Nil,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison procedures such as `smallerthan`.
    Bool(bool),
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A piece of text.
    Text(Rc<str>),
    /// A procedure that can be invoked.
    Function(Function),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v.into())
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<&LiteralValue> for Value {
    fn from(value: &LiteralValue) -> Self {
        match value {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Text(t) => Self::Text(Rc::clone(t)),
        }
    }
}

impl Value {
    /// Coerces the value to a condition for `if` and `while`.
    ///
    /// - Booleans are their own truth value.
    /// - Integers are truthy only when strictly positive, so zero and
    ///   negative numbers are falsy.
    /// - Text is truthy when it is not empty.
    /// - `nothing` is falsy.
    /// - Procedures are truthy.
    ///
    /// # Example
    /// ```
    /// use boomslang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(1).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Integer(-1).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n > 0,
            Self::Text(t) => !t.is_empty(),
            Self::Nil => false,
            Self::Function(_) => true,
        }
    }

    /// Returns the name of the value's kind, as used in type errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nothing",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "number",
            Self::Text(_) => "text",
            Self::Function(_) => "procedure",
        }
    }

    /// Returns `true` if the value is [`Nil`](Value::Nil).
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nothing"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}
