use log::trace;

use crate::{
    ast::{LiteralValue, Node},
    error::ParseError,
    interpreter::{
        lexer::{Span, Token, TokenKind},
        parser::utils::{join_words, partition, partition_by_word},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The operator words recognized between two expressions, in the order they
/// are searched for.
///
/// Each one is rewritten into a call to the builtin bound to
/// [`infix_name`]`(op)`.
pub const INFIX_OPERATORS: [&str; 8] = ["equals",
                                        "notequals",
                                        "smallerthan",
                                        "biggerthan",
                                        "multiply",
                                        "divides",
                                        "plus",
                                        "minus"];

/// The name an infix operator's builtin is bound to.
///
/// Names written in source are single words, or words joined by single spaces.
/// This name has two spaces after `infix`, so no source text can refer to it
/// or rebind it.
///
/// # Example
/// ```
/// use boomslang::interpreter::parser::core::infix_name;
///
/// assert_eq!(infix_name("plus"), "infix  plus");
/// ```
#[must_use]
pub fn infix_name(op: &str) -> String {
    format!("infix  {op}")
}

/// Parses the tokens of an expression.
///
/// There is no precedence table. The tokens are searched, in this order, for
///
/// 1. the keyword `of`, splitting a procedure from its argument,
/// 2. each of the [`INFIX_OPERATORS`],
/// 3. a leading `the`, introducing a name,
///
/// and the first hit decides the shape of the expression. Anything else is a
/// procedure invocation without `of` (`show the x`) or a single atom.
///
/// # Parameters
/// - `words`: The tokens of the expression; never includes the line end.
/// - `anchor`: Location used for errors when `words` runs out.
///
/// # Errors
/// Returns a [`ParseError`] if `words` is empty or does not form an
/// expression.
pub fn parse_expression(words: &[&Token], anchor: &Span) -> ParseResult<Node> {
    let Some(first) = words.first() else {
        return Err(ParseError::MissingExpression { context: "here".to_string(),
                                                   span:    anchor.clone(), });
    };
    let line = first.span.line;
    trace!(target: "parse", "{}: expression of {} tokens", first.span, words.len());

    if let Some((head, of, args)) = partition(words, TokenKind::Of) {
        let callee = parse_fun_head(head, &of.span)?;
        let arguments = parse_args(args, anchor)?;

        return Ok(Node::Call { callee: Box::new(callee),
                               arguments,
                               line });
    }

    for op in INFIX_OPERATORS {
        if let Some((left, operator, right)) = partition_by_word(words, op) {
            let lhs = expect_expression(left, &operator.span, &format!("before '{op}'"))?;
            let rhs = expect_expression(right, anchor, &format!("after '{op}'"))?;

            let callee = Node::Identifier { name: infix_name(op),
                                            line };
            return Ok(Node::Call { callee: Box::new(callee),
                                   arguments: vec![lhs, rhs],
                                   line });
        }
    }

    if first.kind == TokenKind::The {
        return parse_identifier(words, anchor);
    }

    parse_fun_call(words, anchor)
}

/// Like [`parse_expression`], but an empty `words` is reported with the given
/// description of where the expression was expected.
pub fn expect_expression(words: &[&Token], anchor: &Span, context: &str) -> ParseResult<Node> {
    if words.is_empty() {
        return Err(ParseError::MissingExpression { context: context.to_string(),
                                                   span:    anchor.clone(), });
    }
    parse_expression(words, anchor)
}

/// Parses `the` followed by the words of a name.
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] if the first token is not
/// `the`, and [`ParseError::ExpectedWord`] if the name is empty or contains
/// anything but plain words.
///
/// # Example
/// ```
/// use boomslang::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse_identifier},
/// };
///
/// let tokens = tokenize("<test>", "the answer to everything").unwrap();
/// let words = tokens.iter().take(4).collect::<Vec<_>>();
///
/// let node = parse_identifier(&words, &tokens[4].span).unwrap();
/// assert_eq!(node,
///            Node::Identifier { name: "answer to everything".to_string(),
///                               line: 1, });
/// ```
pub fn parse_identifier(words: &[&Token], anchor: &Span) -> ParseResult<Node> {
    let Some((first, rest)) = words.split_first() else {
        return Err(ParseError::InvalidAssignmentTarget { found: "nothing".to_string(),
                                                         span:  anchor.clone(), });
    };
    if first.kind != TokenKind::The {
        return Err(ParseError::InvalidAssignmentTarget { found: first.to_string(),
                                                         span:  first.span.clone(), });
    }

    let name = join_words(rest, anchor)?;
    Ok(Node::Identifier { name,
                          line: first.span.line })
}

/// Parses the expression in front of `of`.
///
/// A single plain word is the one place where a bare word names something: it
/// refers to the procedure bound to that word.
fn parse_fun_head(words: &[&Token], anchor: &Span) -> ParseResult<Node> {
    match words {
        [] => Err(ParseError::MissingExpression { context: "naming the procedure before 'of'".to_string(),
                                                  span:    anchor.clone(), }),
        [word] if word.kind == TokenKind::Word => {
            Ok(Node::Identifier { name: word.lexeme.clone(),
                                  line: word.span.line, })
        },
        [token] => parse_atom(token),
        _ => parse_expression(words, anchor),
    }
}

/// Parses the argument list of an invocation.
///
/// No tokens means no arguments; otherwise the tokens form exactly one
/// argument expression.
fn parse_args(words: &[&Token], anchor: &Span) -> ParseResult<Vec<Node>> {
    if words.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![parse_expression(words, anchor)?])
}

/// Parses a single atom, or an invocation whose head is the first token and
/// whose argument is everything after it.
fn parse_fun_call(words: &[&Token], anchor: &Span) -> ParseResult<Node> {
    match words {
        [] => Err(ParseError::MissingExpression { context: "here".to_string(),
                                                  span:    anchor.clone(), }),
        [token] => parse_atom(token),
        [head, rest @ ..] => {
            let callee = parse_fun_head(&[*head], &head.span)?;
            let arguments = parse_args(rest, anchor)?;

            Ok(Node::Call { callee: Box::new(callee),
                            arguments,
                            line: head.span.line })
        },
    }
}

/// Parses a literal: a number, `true`, `false` or a `text` literal.
///
/// # Errors
/// Returns [`ParseError::InvalidNumber`] for a number token that does not fit
/// a 64-bit integer, and [`ParseError::UnexpectedToken`] for anything that is
/// not a literal.
pub fn parse_atom(token: &Token) -> ParseResult<Node> {
    let value = match token.kind {
        TokenKind::Number => {
            let n = token.lexeme
                         .parse::<i64>()
                         .map_err(|_| ParseError::InvalidNumber { lexeme: token.lexeme.clone(),
                                                                  span:   token.span.clone(), })?;
            LiteralValue::Integer(n)
        },
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::Text => LiteralValue::from(token.lexeme.as_str()),
        _ => {
            return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                     span:  token.span.clone(), });
        },
    };

    Ok(Node::Literal { value,
                       line: token.span.line })
}
