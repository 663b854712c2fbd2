use crate::interpreter::lexer::{Span, indent::Indent};

#[derive(Debug)]
/// Represents all errors that can occur while lexing.
pub enum LexError {
    /// A line was indented with both tabs and spaces, or with the other kind of
    /// whitespace than the source's shift unit.
    MixedIndentation {
        /// The location of the offending line.
        span: Span,
    },
    /// The indentation is not a whole multiple of the shift unit.
    InconsistentIndentation {
        /// The indentation found on the line.
        found: Indent,
        /// The shift unit fixed by the first indented line.
        unit:  Indent,
        /// The location of the offending line.
        span:  Span,
    },
    /// The indentation grew by more than one level at once.
    IndentJump {
        /// The number of levels the line tried to indent by.
        levels: usize,
        /// The location of the offending line.
        span:   Span,
    },
    /// Reading from the source failed.
    Io {
        /// The name of the source.
        source:  String,
        /// The reason reported by the reader.
        message: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MixedIndentation { span } => {
                write!(f, "Error at {span}: Can not mix tabs and spaces in indentation.")
            },
            Self::InconsistentIndentation { found, unit, span } => write!(f,
                                                                         "Error at {span}: Wrong amount of indentation: found {found}, but this file indents by {unit}."),
            Self::IndentJump { levels, span } => write!(f,
                                                        "Error at {span}: Can not indent multiple levels at a time: you tried to indent {levels} levels."),
            Self::Io { source, message } => {
                write!(f, "Error reading {source}: {message}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
