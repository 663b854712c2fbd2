/// Lexing errors.
///
/// Indentation consistency violations and input failures detected while
/// turning source lines into tokens. A lexing error aborts the whole run
/// before any parsing happens.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Every parse error carries the span of the offending token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error values produced during evaluation, such as unknown
/// names, mismatched types, and bad procedure invocations.
pub mod runtime_error;
/// Propagation of errors and control signals.
///
/// Defines [`Unwind`], the single channel through which runtime errors,
/// `break` and `returns` travel up the evaluator, and the [`UnwindContext`]
/// that collects diagnostic frames on the way.
pub mod unwind;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use unwind::{Frame, Unwind, UnwindContext};

/// Exit status for unusable command-line options.
pub const EXIT_BAD_OPTS: i32 = 10;
/// Exit status for a script file that cannot be used.
pub const EXIT_BAD_FILE: i32 = 11;
/// Exit status for a lexing failure.
pub const EXIT_LEX_FAILURE: i32 = 12;
/// Exit status for a parsing failure.
pub const EXIT_PARSE_FAILURE: i32 = 13;
/// Exit status for a runtime failure.
pub const EXIT_RUNTIME_FAILURE: i32 = 14;
/// Exit status for a control signal that escaped the program.
pub const EXIT_INTERNAL_FAILURE: i32 = 15;

#[derive(Debug)]
/// Represents every way running a program can fail.
pub enum ProgramError {
    /// The source could not be tokenized.
    Lex(LexError),
    /// The tokens could not be parsed.
    Parse(ParseError),
    /// Evaluation stopped with a runtime error.
    Runtime(Box<UnwindContext>),
    /// A `break` or `returns` reached the top level without being intercepted.
    EscapedSignal {
        /// The keyword of the signal that escaped.
        signal: &'static str,
    },
}

impl ProgramError {
    /// Returns the process exit status associated with this failure.
    ///
    /// ## Example
    /// ```
    /// use boomslang::error::{EXIT_INTERNAL_FAILURE, ProgramError};
    ///
    /// let err = ProgramError::EscapedSignal { signal: "break" };
    /// assert_eq!(err.exit_code(), EXIT_INTERNAL_FAILURE);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Lex(_) => EXIT_LEX_FAILURE,
            Self::Parse(_) => EXIT_PARSE_FAILURE,
            Self::Runtime(_) => EXIT_RUNTIME_FAILURE,
            Self::EscapedSignal { .. } => EXIT_INTERNAL_FAILURE,
        }
    }
}

impl From<LexError> for ProgramError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for ProgramError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<Unwind> for ProgramError {
    fn from(unwind: Unwind) -> Self {
        match unwind {
            Unwind::Error(context) => Self::Runtime(context),
            Unwind::Break => Self::EscapedSignal { signal: "break" },
            Unwind::Return(_) => Self::EscapedSignal { signal: "returns" },
        }
    }
}

impl std::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "I could not read this program: {e}"),
            Self::Parse(e) => write!(f, "I could not understand this program: {e}"),
            Self::Runtime(context) => write!(f, "Failure occurred during runtime:\n{context}"),
            Self::EscapedSignal { signal } => write!(f,
                                                     "Internal error: '{signal}' escaped to the top level of the program."),
        }
    }
}

impl std::error::Error for ProgramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(_) | Self::EscapedSignal { .. } => None,
        }
    }
}
