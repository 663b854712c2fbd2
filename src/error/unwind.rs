use std::fmt;

use crate::{ast::Node, error::RuntimeError, interpreter::value::core::Value};

/// One step of the trail recorded while an error travels outwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Label of the node whose evaluation was interrupted.
    pub label:   String,
    /// What that node was doing at the time.
    pub message: String,
    /// Line of the node in the source code.
    pub line:    usize,
}

/// A runtime error together with the frames it passed through.
///
/// There is only ever one context per failure: enclosing evaluation sites
/// append to `frames` instead of wrapping the context again.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwindContext {
    /// The error that started the unwind.
    pub cause:  RuntimeError,
    /// Frames in the order they were added, innermost first.
    pub frames: Vec<Frame>,
}

impl fmt::Display for UnwindContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)?;
        for frame in &self.frames {
            write!(f,
                   "\n  while {} ({}, line {})",
                   frame.message, frame.label, frame.line)?;
        }
        Ok(())
    }
}

/// Anything that makes evaluation stop and propagate instead of continuing.
///
/// Errors, `break` and `returns` all travel through this one channel; the
/// loop and procedure evaluators tell them apart by matching the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    /// A genuine runtime error.
    Error(Box<UnwindContext>),
    /// `break` leaving the innermost loop.
    Break,
    /// `returns` leaving the innermost procedure with a value.
    Return(Value),
}

impl Unwind {
    /// Appends a diagnostic frame for `node` if this unwind is an error.
    ///
    /// Control signals pass through untouched.
    ///
    /// ## Example
    /// ```
    /// use boomslang::{
    ///     ast::Node,
    ///     error::{RuntimeError, Unwind},
    /// };
    ///
    /// let node = Node::Break { line: 3 };
    /// let unwind = Unwind::from(RuntimeError::NameError { name: "x".into() });
    ///
    /// let Unwind::Error(context) = unwind.with_frame(&node, "testing") else {
    ///     panic!("expected an error");
    /// };
    /// assert_eq!(context.frames.len(), 1);
    /// assert_eq!(context.frames[0].line, 3);
    ///
    /// assert_eq!(Unwind::Break.with_frame(&node, "testing"), Unwind::Break);
    /// ```
    #[must_use]
    pub fn with_frame(self, node: &Node, message: impl Into<String>) -> Self {
        match self {
            Self::Error(mut context) => {
                context.frames.push(Frame { label:   node.label(),
                                            message: message.into(),
                                            line:    node.line_number(), });
                Self::Error(context)
            },
            signal => signal,
        }
    }

    /// Returns the runtime error behind this unwind, if it is one.
    #[must_use]
    pub fn cause(&self) -> Option<&RuntimeError> {
        match self {
            Self::Error(context) => Some(&context.cause),
            Self::Break | Self::Return(_) => None,
        }
    }
}

impl From<RuntimeError> for Unwind {
    fn from(cause: RuntimeError) -> Self {
        Self::Error(Box::new(UnwindContext { cause,
                                             frames: Vec::new() }))
    }
}

impl fmt::Display for Unwind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(context) => write!(f, "{context}"),
            Self::Break => write!(f, "break"),
            Self::Return(value) => write!(f, "returns {value}"),
        }
    }
}
