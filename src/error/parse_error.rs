use crate::interpreter::lexer::Span;

#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of the token encountered.
        token: String,
        /// The location of the token.
        span:  Span,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The location of the end of input.
        span: Span,
    },
    /// A statement that needs an indented block was not followed by one.
    ExpectedBlock {
        /// Description of the token found instead.
        found: String,
        /// The location of that token.
        span:  Span,
    },
    /// A block was still open when the input ended.
    UnterminatedBlock {
        /// The location of the end of input.
        span: Span,
    },
    /// A line was indented without a statement that opens a block.
    UnexpectedIndentation {
        /// The location of the indented line.
        span: Span,
    },
    /// The procedure definition syntax was invalid.
    InvalidFunctionDefinition {
        /// What is wrong with the definition.
        details: String,
        /// The location of the offending token.
        span:    Span,
    },
    /// The left side of `is` does not name anything.
    InvalidAssignmentTarget {
        /// Description of the token found instead of `the`.
        found: String,
        /// The location of that token.
        span:  Span,
    },
    /// A name must consist of plain words only.
    ExpectedWord {
        /// Description of the token found instead.
        found: String,
        /// The location of that token.
        span:  Span,
    },
    /// A token that starts with a digit is not a valid integer.
    InvalidNumber {
        /// The lexeme that failed to parse.
        lexeme: String,
        /// The location of the token.
        span:   Span,
    },
    /// Found extra tokens after a statement that must stand alone.
    TrailingTokens {
        /// The first extra token.
        token: String,
        /// The location of that token.
        span:  Span,
    },
    /// An expression was required but the line ran out of tokens.
    MissingExpression {
        /// What the expression was needed for.
        context: String,
        /// The location where the expression should have been.
        span:    Span,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, span } => {
                write!(f, "Error at {span}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { span } => {
                write!(f, "Error at {span}: Unexpected end of input.")
            },
            Self::ExpectedBlock { found, span } => write!(f,
                                                          "Error at {span}: Expected an indented block, but found {found}."),
            Self::UnterminatedBlock { span } => {
                write!(f, "Error at {span}: The input ended inside an indented block.")
            },
            Self::UnexpectedIndentation { span } => write!(f,
                                                           "Error at {span}: Unexpected indentation. Only 'if', 'otherwise', 'otif', 'while' and 'by' open a block."),
            Self::InvalidFunctionDefinition { details, span } => write!(f,
                                                                        "Error at {span}: Invalid procedure definition: {details}. Example: by square of n we mean"),
            Self::InvalidAssignmentTarget { found, span } => write!(f,
                                                                    "Error at {span}: Expected 'the' to begin the name being assigned, found {found}."),
            Self::ExpectedWord { found, span } => {
                write!(f, "Error at {span}: Expected a plain word inside a name, found {found}.")
            },
            Self::InvalidNumber { lexeme, span } => {
                write!(f, "Error at {span}: '{lexeme}' is not a valid number.")
            },
            Self::TrailingTokens { token, span } => {
                write!(f, "Error at {span}: Extra tokens after statement: {token}.")
            },
            Self::MissingExpression { context, span } => {
                write!(f, "Error at {span}: Expected an expression {context}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
