use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Span, Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// One logical line: the tokens between two line ends.
///
/// `span` is the location of the line end (the `Newline` or `Eof` token), which
/// anchors errors about tokens that are missing from the line.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    /// The tokens of the line, without the terminating `Newline`.
    pub words: Vec<&'a Token>,
    /// Location of the end of the line.
    pub span:  Span,
}

impl Line<'_> {
    /// Line number of the statement: the first token's, or the line end's for
    /// an empty line.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.words.first().map_or(self.span.line, |t| t.span.line)
    }
}

/// Returns `true` if there is at least one more statement in `tokens`.
pub fn has_tokens<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|t| t.kind != TokenKind::Eof)
}

/// Consumes the next logical line, including its `Newline`.
///
/// Returns `None` once only `Eof` (or nothing) is left.
pub fn next_line<'a, I>(tokens: &mut Peekable<I>) -> Option<Line<'a>>
    where I: Iterator<Item = &'a Token>
{
    if !has_tokens(tokens) {
        return None;
    }

    let mut words = Vec::new();
    let mut span = None;

    while let Some(&token) = tokens.peek() {
        match token.kind {
            TokenKind::Newline => {
                tokens.next();
                span = Some(token.span.clone());
                break;
            },
            TokenKind::Eof => {
                span = Some(token.span.clone());
                break;
            },
            _ => {
                words.push(token);
                tokens.next();
            },
        }
    }

    let span = span.or_else(|| words.last().map(|t| t.span.clone()))?;
    Some(Line { words, span })
}

/// Consumes the next line only if it starts with a token of `kind`.
pub fn next_line_if<'a, I>(tokens: &mut Peekable<I>, kind: TokenKind) -> Option<Line<'a>>
    where I: Iterator<Item = &'a Token>
{
    if tokens.peek().is_some_and(|t| t.kind == kind) {
        next_line(tokens)
    } else {
        None
    }
}

/// Splits `words` at the first token of the given kind.
///
/// Returns the tokens before the match, the matching token and the tokens
/// after it, or `None` if no token matches. Because the first match always
/// wins, keywords that appear earlier in a line bind looser than later ones.
///
/// # Example
/// ```
/// use boomslang::interpreter::{
///     lexer::{TokenKind, tokenize},
///     parser::utils::partition,
/// };
///
/// let tokens = tokenize("<test>", "the x is 5 is 6").unwrap();
/// let words = tokens.iter().collect::<Vec<_>>();
///
/// let (left, _, right) = partition(&words[..6], TokenKind::Is).unwrap();
/// assert_eq!(left.len(), 2);
/// assert_eq!(right.len(), 3);
///
/// assert!(partition(&words[..6], TokenKind::Of).is_none());
/// ```
#[must_use]
pub fn partition<'w, 'a>(words: &'w [&'a Token],
                         kind: TokenKind)
                         -> Option<(&'w [&'a Token], &'a Token, &'w [&'a Token])> {
    split_at_first(words, |t| t.kind == kind)
}

/// Splits `words` at the first plain word whose text is `text`.
///
/// Used for the infix operator words, which are not keywords.
#[must_use]
pub fn partition_by_word<'w, 'a>(words: &'w [&'a Token],
                                 text: &str)
                                 -> Option<(&'w [&'a Token], &'a Token, &'w [&'a Token])> {
    split_at_first(words, |t| t.is_word(text))
}

fn split_at_first<'w, 'a>(words: &'w [&'a Token],
                          pred: impl Fn(&Token) -> bool)
                          -> Option<(&'w [&'a Token], &'a Token, &'w [&'a Token])> {
    let idx = words.iter().position(|t| pred(t))?;
    Some((&words[..idx], words[idx], &words[idx + 1..]))
}

/// Joins plain words into a single name, separated by single spaces.
///
/// # Errors
/// Returns [`ParseError::ExpectedWord`] if `words` is empty (anchored at
/// `anchor`) or contains anything but plain words.
pub fn join_words(words: &[&Token], anchor: &Span) -> ParseResult<String> {
    if words.is_empty() {
        return Err(ParseError::ExpectedWord { found: "nothing".to_string(),
                                              span:  anchor.clone(), });
    }

    if let Some(bad) = words.iter().find(|t| t.kind != TokenKind::Word) {
        return Err(ParseError::ExpectedWord { found: bad.to_string(),
                                              span:  bad.span.clone(), });
    }

    Ok(words.iter().map(|t| t.lexeme.as_str()).collect::<Vec<_>>().join(" "))
}

/// Fails if the line holds anything after its first token.
pub fn expect_alone(line: &Line<'_>) -> ParseResult<()> {
    match line.words.get(1) {
        Some(extra) => Err(ParseError::TrailingTokens { token: extra.to_string(),
                                                        span:  extra.span.clone(), }),
        None => Ok(()),
    }
}

/// Consumes the next token, which must be of the given kind.
///
/// # Errors
/// Returns [`ParseError::ExpectedBlock`] for a missing `BeginIndent`, and
/// [`ParseError::UnexpectedToken`] or [`ParseError::UnexpectedEndOfInput`]
/// otherwise.
pub fn consume_or_fail<'a, I>(tokens: &mut Peekable<I>,
                              kind: TokenKind,
                              anchor: &Span)
                              -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.next_if(|t| t.kind == kind) {
        return Ok(token);
    }

    let (found, span) = match tokens.peek() {
        Some(token) => (*token, token.span.clone()),
        None => return Err(ParseError::UnexpectedEndOfInput { span: anchor.clone() }),
    };

    Err(match (kind, found.kind) {
        (TokenKind::BeginIndent, _) => ParseError::ExpectedBlock { found: found.to_string(),
                                                                   span },
        (_, TokenKind::Eof) => ParseError::UnexpectedEndOfInput { span },
        _ => ParseError::UnexpectedToken { token: format!("expected {kind}, found {found}"),
                                           span },
    })
}
