use std::{fmt, rc::Rc};

use log::{debug, trace};
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::source::{Source, StrSource},
};

/// Indentation measurement and translation to indentation levels.
pub mod indent;

use indent::{Indent, translate};

pub type LexResult<T> = Result<T, LexError>;

/// Where a token came from: the source name and the 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Name of the source the token was read from.
    pub source: Rc<str>,
    /// Line number in the source.
    pub line:   usize,
}

impl Span {
    #[must_use]
    pub fn new(source: &str, line: usize) -> Self {
        Self { source: source.into(),
               line }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// The kind of a token.
///
/// Keywords get one kind each; everything else on a line is a number, a word
/// or a rest-of-line text literal. Line and indentation structure is made
/// explicit through `Newline`, `BeginIndent` and `EndIndent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of a logical line.
    Newline,
    /// End of input.
    Eof,
    /// The indentation level grew by one.
    BeginIndent,
    /// The indentation level dropped by one.
    EndIndent,
    /// A word starting with a numeric character.
    Number,
    /// Any other word.
    Word,
    /// Everything after the `text` keyword on its line.
    Text,
    /// `is`
    Is,
    /// `the`
    The,
    /// `that`
    That,
    /// `of`
    Of,
    /// `if`
    If,
    /// `otherwise`
    Otherwise,
    /// `otif`
    Otif,
    /// `for`
    For,
    /// `while`
    While,
    /// `true`
    True,
    /// `false`
    False,
    /// `break`
    Break,
    /// `by`
    By,
    /// `we mean`
    WeMean,
    /// `returns`
    Returns,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Newline => return write!(f, "end of line"),
            Self::Eof => return write!(f, "end of input"),
            Self::BeginIndent => return write!(f, "indentation"),
            Self::EndIndent => return write!(f, "end of indentation"),
            Self::Number => return write!(f, "number"),
            Self::Word => return write!(f, "word"),
            Self::Text => return write!(f, "text"),
            Self::Is => "is",
            Self::The => "the",
            Self::That => "that",
            Self::Of => "of",
            Self::If => "if",
            Self::Otherwise => "otherwise",
            Self::Otif => "otif",
            Self::For => "for",
            Self::While => "while",
            Self::True => "true",
            Self::False => "false",
            Self::Break => "break",
            Self::By => "by",
            Self::WeMean => "we mean",
            Self::Returns => "returns",
        };
        write!(f, "keyword '{keyword}'")
    }
}

/// A lexical token. Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: String,
    /// Where the token came from.
    pub span:   Span,
}

impl Token {
    /// Returns `true` if the token is a plain word with the given text.
    #[must_use]
    pub fn is_word(&self, text: &str) -> bool {
        self.kind == TokenKind::Word && self.lexeme == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Word | TokenKind::Text => {
                write!(f, "{} '{}'", self.kind, self.lexeme)
            },
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// The words of a single line, after indentation has been stripped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
enum Lexeme {
    #[token("is")]
    Is,
    #[token("the")]
    The,
    #[token("that")]
    That,
    #[token("of")]
    Of,
    #[token("if")]
    If,
    #[token("otherwise")]
    Otherwise,
    #[token("otif")]
    Otif,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("break")]
    Break,
    #[token("by")]
    By,
    /// First half of `we mean`; a plain word when not followed by `mean`.
    #[token("we")]
    We,
    /// Second half of `we mean`; a plain word anywhere else.
    #[token("mean")]
    Mean,
    #[token("returns")]
    Returns,
    #[token("text")]
    Text,
    /// Any other run of non-whitespace characters.
    #[regex(r"\S+")]
    Word,
}

/// Turns the lines of a [`Source`] into tokens.
///
/// Indentation is tracked structurally: the first indented line fixes the
/// source's shift unit, every later line is translated into a level, and level
/// changes become `BeginIndent`/`EndIndent` tokens. Whitespace-only lines
/// produce nothing.
pub struct Lexer<'s, S: Source + ?Sized> {
    source: &'s mut S,
    name:   Rc<str>,
    line:   usize,
    level:  usize,
    unit:   Option<Indent>,
    tokens: Vec<Token>,
}

impl<'s, S: Source + ?Sized> Lexer<'s, S> {
    pub fn new(source: &'s mut S) -> Self {
        let name = source.name().into();
        Self { source,
               name,
               line: 0,
               level: 0,
               unit: None,
               tokens: Vec::new() }
    }

    /// Lexes the whole source.
    ///
    /// At the end of input, enough `EndIndent` tokens are emitted to return to
    /// level zero, followed by a single `Eof`.
    ///
    /// # Errors
    /// Returns a [`LexError`] on mixed tabs and spaces, indentation that is
    /// not a multiple of the shift unit, indenting more than one level at once,
    /// or a failing source.
    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        while let Some(line) = self.source
                                   .read_line()
                                   .map_err(|e| LexError::Io { source:  self.name.to_string(),
                                                               message: e.to_string(), })?
        {
            self.line += 1;
            self.lex_line(&line)?;
        }

        let span = self.span();
        self.change_level(0, &span)?;
        self.emit(TokenKind::Eof, "");

        debug!(target: "lex",
               "lexed {} lines of {} into {} tokens",
               self.line,
               self.name,
               self.tokens.len());
        Ok(self.tokens)
    }

    fn span(&self) -> Span {
        Span { source: Rc::clone(&self.name),
               line:   self.line, }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str) {
        let token = Token { kind,
                            lexeme: lexeme.to_string(),
                            span: self.span() };
        trace!(target: "lex", "{}: {token}", token.span);
        self.tokens.push(token);
    }

    fn lex_line(&mut self, line: &str) -> LexResult<()> {
        let (indent, rest) = Indent::measure(line);
        if rest.trim().is_empty() {
            return Ok(());
        }

        let span = self.span();
        let level = if indent.is_zero() {
            0
        } else {
            let unit = *self.unit.get_or_insert_with(|| {
                                     debug!(target: "lex", "{span}: shift unit is {indent}");
                                     indent
                                 });
            translate(indent, unit, &span)?
        };

        self.change_level(level, &span)?;
        self.lex_words(rest);
        self.emit(TokenKind::Newline, "\n");
        Ok(())
    }

    fn change_level(&mut self, level: usize, span: &Span) -> LexResult<()> {
        if level > self.level + 1 {
            return Err(LexError::IndentJump { levels: level - self.level,
                                              span:   span.clone(), });
        }

        if level > self.level {
            self.emit(TokenKind::BeginIndent, "");
        } else {
            for _ in level..self.level {
                self.emit(TokenKind::EndIndent, "");
            }
        }

        if level != self.level {
            trace!(target: "lex", "{span}: indentation level {} -> {level}", self.level);
        }
        self.level = level;
        Ok(())
    }

    fn lex_words(&mut self, text: &str) {
        let mut words = Lexeme::lexer(text);

        while let Some(lexeme) = words.next() {
            // `\s+` and `\S+` between them cover every character.
            let kind = match lexeme.unwrap_or(Lexeme::Word) {
                Lexeme::Is => TokenKind::Is,
                Lexeme::The => TokenKind::The,
                Lexeme::That => TokenKind::That,
                Lexeme::Of => TokenKind::Of,
                Lexeme::If => TokenKind::If,
                Lexeme::Otherwise => TokenKind::Otherwise,
                Lexeme::Otif => TokenKind::Otif,
                Lexeme::For => TokenKind::For,
                Lexeme::While => TokenKind::While,
                Lexeme::True => TokenKind::True,
                Lexeme::False => TokenKind::False,
                Lexeme::Break => TokenKind::Break,
                Lexeme::By => TokenKind::By,
                Lexeme::Returns => TokenKind::Returns,
                Lexeme::We => {
                    let mut ahead = words.clone();
                    if let Some(Ok(Lexeme::Mean)) = ahead.next() {
                        words = ahead;
                        self.emit(TokenKind::WeMean, "we mean");
                        continue;
                    }
                    TokenKind::Word
                },
                Lexeme::Mean => TokenKind::Word,
                Lexeme::Text => {
                    let text = words.remainder().split_whitespace().collect::<Vec<_>>().join(" ");
                    self.emit(TokenKind::Text, &text);
                    break;
                },
                Lexeme::Word if words.slice().starts_with(char::is_numeric) => TokenKind::Number,
                Lexeme::Word => TokenKind::Word,
            };
            self.emit(kind, words.slice());
        }
    }
}

/// Lexes an in-memory program.
///
/// # Errors
/// Returns a [`LexError`] if the indentation of `text` is inconsistent.
///
/// # Example
/// ```
/// use boomslang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("<test>", "the x is 5").unwrap();
/// let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            [TokenKind::The,
///             TokenKind::Word,
///             TokenKind::Is,
///             TokenKind::Number,
///             TokenKind::Newline,
///             TokenKind::Eof]);
/// ```
pub fn tokenize(name: &str, text: &str) -> LexResult<Vec<Token>> {
    Lexer::new(&mut StrSource::new(name, text)).lex()
}
