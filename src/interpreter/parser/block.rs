use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Span, Token, TokenKind},
        parser::{
            core::{ParseResult, expect_expression},
            statement::parse_statement,
            utils::{Line, consume_or_fail, expect_alone, next_line, next_line_if},
        },
    },
};

/// Parses an indented block.
///
/// The next token must open a new indentation level. Every line up to the
/// matching `EndIndent` is parsed as a statement; nested blocks consume their
/// own markers.
///
/// # Parameters
/// - `tokens`: Token stream positioned right after the line that owns the
///   block.
/// - `anchor`: Location of the owning line's end, used when the input ends.
///
/// # Returns
/// The statements of the block, in order.
///
/// # Errors
/// - [`ParseError::ExpectedBlock`] if the block is not indented.
/// - [`ParseError::UnterminatedBlock`] if the input ends inside the block.
/// - Any error from the statements inside.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, anchor: &Span) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token>
{
    consume_or_fail(tokens, TokenKind::BeginIndent, anchor)?;

    let mut statements = Vec::new();
    loop {
        if tokens.next_if(|t| t.kind == TokenKind::EndIndent).is_some() {
            return Ok(statements);
        }

        let end = tokens.peek().map_or_else(|| anchor.clone(), |t| t.span.clone());
        let Some(line) = next_line(tokens) else {
            return Err(ParseError::UnterminatedBlock { span: end });
        };
        statements.push(parse_statement(line, tokens)?);
    }
}

/// Parses an `if` (or `otif`) statement.
///
/// Syntax:
/// ```text
/// if <condition>
///     <block>
/// otherwise
///     <block>
/// ```
/// The `otherwise` part is optional. In its place, an `otif <condition>` line
/// starts another conditional, which becomes the only statement of the else
/// block.
///
/// # Errors
/// - [`ParseError::MissingExpression`] if the condition is empty.
/// - [`ParseError::TrailingTokens`] if `otherwise` does not stand alone.
/// - Any error from the condition or the blocks.
pub fn parse_conditional<'a, I>(line: Line<'a>, tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let keyword = line.words[0];
    let condition = expect_expression(&line.words[1..], &line.span, &format!("after {}", keyword.kind))?;
    let then_block = parse_block(tokens, &line.span)?;

    let else_block = if let Some(otherwise) = next_line_if(tokens, TokenKind::Otherwise) {
        expect_alone(&otherwise)?;
        parse_block(tokens, &otherwise.span)?
    } else if let Some(otif) = next_line_if(tokens, TokenKind::Otif) {
        vec![parse_conditional(otif, tokens)?]
    } else {
        Vec::new()
    };

    Ok(Node::If { condition: Box::new(condition),
                  then_block,
                  else_block,
                  line: keyword.span.line })
}

/// Parses a `while` loop with its optional `otherwise` block.
///
/// Syntax:
/// ```text
/// while <condition>
///     <block>
/// otherwise
///     <block>
/// ```
///
/// # Errors
/// - [`ParseError::MissingExpression`] if the condition is empty.
/// - [`ParseError::TrailingTokens`] if `otherwise` does not stand alone.
/// - Any error from the condition or the blocks.
pub fn parse_loop<'a, I>(line: Line<'a>, tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let keyword = line.words[0];
    let condition = expect_expression(&line.words[1..], &line.span, &format!("after {}", keyword.kind))?;
    let body = parse_block(tokens, &line.span)?;

    let otherwise = match next_line_if(tokens, TokenKind::Otherwise) {
        Some(otherwise) => {
            expect_alone(&otherwise)?;
            parse_block(tokens, &otherwise.span)?
        },
        None => Vec::new(),
    };

    Ok(Node::Loop { condition: Box::new(condition),
                    body,
                    otherwise,
                    line: keyword.span.line })
}
