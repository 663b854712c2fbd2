use crate::interpreter::value::core::Value;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a name that is not bound in any enclosing scope.
    NameError {
        /// The missing name.
        name: String,
    },
    /// A value had an unexpected kind.
    TypeError {
        /// The kind of value that was expected (e.g. `number`).
        expected: String,
        /// The offending value.
        value:    Value,
    },
    /// A procedure was invoked badly: wrong argument count, a value that is
    /// not a procedure, or arguments the procedure can not work with.
    MethodError {
        /// Details about the bad invocation.
        details: String,
    },
    /// The target of an assignment is not a name.
    UnpackError {
        /// The label of the rejected target node.
        target: String,
    },
    /// Reading or writing a stream failed.
    IoError {
        /// Details about the failure.
        details: String,
    },
}

impl RuntimeError {
    /// Builds a [`RuntimeError::MethodError`] from anything printable.
    pub fn method(details: impl Into<String>) -> Self {
        Self::MethodError { details: details.into() }
    }

    /// Builds a [`RuntimeError::TypeError`] for `value`.
    pub fn type_error(expected: &str, value: &Value) -> Self {
        Self::TypeError { expected: expected.to_string(),
                          value:    value.clone(), }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError { details: e.to_string() }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameError { name } => write!(f,
                                               "Sorry, I tried and failed to find the name '{name}' in the place you requested it."),
            Self::TypeError { expected, value } => {
                write!(f, "Sorry, but this is not a valid {expected}: {value}")
            },
            Self::MethodError { details } => {
                write!(f, "Sorry, but I could not carry out this procedure call: {details}")
            },
            Self::UnpackError { target } => {
                write!(f, "Sorry, but I can not assign to this {target}.")
            },
            Self::IoError { details } => {
                write!(f, "Sorry, but I could not talk to the outside world: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
