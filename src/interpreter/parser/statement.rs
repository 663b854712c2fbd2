use std::iter::Peekable;

use log::{debug, trace};

use crate::{
    ast::{FunctionDef, LiteralValue, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_block, parse_conditional, parse_loop},
            core::{ParseResult, expect_expression, parse_expression, parse_identifier},
            utils::{Line, expect_alone, join_words, next_line, partition},
        },
    },
};

/// Parses every statement in `tokens` up to the end of input.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no partial program is
/// produced.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    while let Some(line) = next_line(tokens) {
        statements.push(parse_statement(line, tokens)?);
    }

    debug!(target: "parse", "parsed {} top-level statements", statements.len());
    Ok(statements)
}

/// Parses a single statement.
///
/// `line` is the statement's own line, already taken from `tokens`; statements
/// that own a block read the block's lines from `tokens`.
///
/// The statement kind is decided by the first token:
/// - nothing: an empty statement, evaluating to `nothing`,
/// - `if`, `while` or `by`: a conditional, a loop or a procedure definition,
/// - `break`: must stand alone,
/// - `returns`: leaves the current procedure,
/// - indentation: an error, since no statement opened a block.
///
/// Any other line is an assignment if it contains `is`, and an expression
/// statement otherwise.
///
/// # Errors
/// Returns a [`ParseError`] if the line, or any block it owns, is malformed.
pub fn parse_statement<'a, I>(line: Line<'a>, tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let Some(first) = line.words.first().copied() else {
        return Ok(Node::Literal { value: LiteralValue::Nil,
                                  line:  line.span.line, });
    };
    trace!(target: "parse", "{}: statement starting with {first}", first.span);

    match first.kind {
        TokenKind::If => return parse_conditional(line, tokens),
        TokenKind::While => return parse_loop(line, tokens),
        TokenKind::By => return parse_function_definition(&line, tokens),
        TokenKind::Break => {
            expect_alone(&line)?;
            return Ok(Node::Break { line: first.span.line });
        },
        TokenKind::Returns => return parse_return(&line),
        TokenKind::BeginIndent | TokenKind::EndIndent => {
            return Err(ParseError::UnexpectedIndentation { span: first.span.clone() });
        },
        _ => {},
    }

    if let Some((target, is, value)) = partition(&line.words, TokenKind::Is) {
        let target = parse_identifier(target, &is.span)?;
        let value = expect_expression(value, &line.span, "after 'is'")?;

        return Ok(Node::Assignment { target: Box::new(target),
                                     value:  Box::new(value),
                                     line:   first.span.line, });
    }

    parse_expression(&line.words, &line.span)
}

/// Parses `returns <expression>`.
///
/// A bare `returns` gives back `nothing`.
fn parse_return(line: &Line<'_>) -> ParseResult<Node> {
    let number = line.line_number();
    let value = match line.words.get(1..) {
        Some(rest) if !rest.is_empty() => parse_expression(rest, &line.span)?,
        _ => Node::Literal { value: LiteralValue::Nil,
                             line:  number, },
    };

    Ok(Node::Return { value: Box::new(value),
                      line:  number, })
}

/// Parses a procedure definition and its body.
///
/// Syntax: `by <name words> of <parameter words> we mean`, followed by an
/// indented block. Both the name and the parameter may span several words;
/// they are joined with single spaces. Exactly one parameter is supported.
///
/// # Errors
/// Returns [`ParseError::InvalidFunctionDefinition`] if `of` or `we mean` is
/// missing or anything follows `we mean`, [`ParseError::ExpectedWord`] if the
/// name or the parameter is not made of plain words, and any error from
/// parsing the body.
fn parse_function_definition<'a, I>(line: &Line<'a>, tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let by = line.words[0];

    let Some((name_words, of, rest)) = partition(&line.words[1..], TokenKind::Of) else {
        return Err(ParseError::InvalidFunctionDefinition { details: "expected keyword 'of' after the procedure name".to_string(),
                                                           span:    by.span.clone(), });
    };
    let Some((param_words, we_mean, trailing)) = partition(rest, TokenKind::WeMean) else {
        return Err(ParseError::InvalidFunctionDefinition { details: "expected 'we mean' after the parameter".to_string(),
                                                           span:    of.span.clone(), });
    };
    if let Some(extra) = trailing.first() {
        return Err(ParseError::InvalidFunctionDefinition { details: format!("unexpected {extra} after 'we mean'"),
                                                           span:    extra.span.clone(), });
    }

    let name = join_words(name_words, &of.span)?;
    let param = join_words(param_words, &we_mean.span)?;
    debug!(target: "parse", "{}: procedure '{name}' of '{param}'", by.span);

    let body = parse_block(tokens, &line.span)?;

    Ok(Node::FunctionDef(FunctionDef { name,
                                       params: vec![param],
                                       body: body.into(),
                                       line: by.span.line }))
}
