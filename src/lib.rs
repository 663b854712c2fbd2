//! # boomslang
//!
//! boomslang is an interpreter for a small scripting language that reads like
//! English. Blocks are marked by indentation, names are introduced with `the`,
//! and procedures are defined with `by <name> of <parameter> we mean`.
//!
//! ```text
//! the x is 1
//! while the x smallerthan 5
//!     show the x
//!     the x is the x plus 1
//! ```
//!
//! Source text goes through three stages: the [lexer](interpreter::lexer)
//! turns lines into tokens, the [parser](interpreter::parser) builds an
//! [AST](ast), and the [evaluator](interpreter::evaluator) walks it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::info;

use crate::{
    error::ProgramError,
    interpreter::{
        evaluator::core::Context,
        lexer::Lexer,
        parser::statement::parse_program,
        source::{Source, StrSource},
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents statements and
/// expressions as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Describes nodes with short labels for diagnostics.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program,
/// the channel runtime errors and control signals travel through, and the
/// process exit statuses the failures map to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source locations and evaluation frames for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together sources, lexing, parsing, scopes, evaluation,
/// values and streams.
pub mod interpreter;
/// The interactive session.
///
/// Reads chunks of statements from the context's input and runs each one as
/// soon as it is complete.
pub mod repl;

/// Runs a whole program read from `source` in `context`.
///
/// The source is lexed and parsed completely before anything is evaluated, so
/// a program with a syntax error never runs partially.
///
/// # Returns
/// The value of the last statement.
///
/// # Errors
/// Returns a [`ProgramError`] for the phase that failed.
pub fn execute<S>(source: &mut S, context: &mut Context) -> Result<Value, ProgramError>
    where S: Source + ?Sized
{
    let name = source.name().to_string();
    let tokens = Lexer::new(source).lex()?;
    let program = parse_program(&mut tokens.iter().peekable())?;

    info!(target: "eval", "running {name}: {} statements", program.len());
    Ok(context.run(&program)?)
}

/// Runs an in-memory program on the process's standard streams and returns
/// the value of its last statement.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use boomslang::{get_result, interpreter::value::core::Value};
///
/// let source = "the x is 2\nthe x multiply 21";
/// assert_eq!(get_result(source).unwrap(), Value::Integer(42));
///
/// // `y` is never assigned.
/// let source = "the x is the y plus 1";
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, ProgramError> {
    let mut context = Context::new();
    execute(&mut StrSource::new("<input>", source), &mut context)
}
