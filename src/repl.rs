use std::io::{self, Write};

use log::debug;

use crate::{
    error::ProgramError,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::{statement::parse_statement, utils::next_line},
        value::core::Value,
    },
};

/// Greeting printed when an interactive session starts.
pub const BANNER: &str = concat!("boomslang ",
                                 env!("CARGO_PKG_VERSION"),
                                 "\nType a statement and press enter. ",
                                 "A block ends at the first empty line.");

/// First words of a line that starts a block.
const BLOCK_OPENERS: [&str; 3] = ["if", "while", "by"];

/// Runs an interactive session on the context's streams.
///
/// Lines are read with a `> ` prompt. A line that opens a block starts a
/// chunk, and further lines are read with a `. ` prompt until an empty line.
/// Every chunk runs in the context's global scope, so bindings persist across
/// chunks. Results other than `nothing` are echoed as `=> value`; errors are
/// written to the error stream and the session goes on. The session ends at
/// the end of input.
///
/// # Errors
/// Returns an error only if the streams themselves fail.
///
/// # Example
/// ```
/// use boomslang::{
///     interpreter::{evaluator::core::Context, streams::Streams},
///     repl,
/// };
///
/// let (streams, output, errors) = Streams::captured("the x is 2\nthe x plus 3\nthe y\n");
/// let mut ctx = Context::with_streams(streams);
///
/// repl::run(&mut ctx).unwrap();
///
/// assert!(output.contents().contains("=> 5"));
/// assert!(errors.contents().contains("'y'"));
/// ```
pub fn run(context: &mut Context) -> io::Result<()> {
    writeln!(context.streams.output, "{BANNER}")?;

    let mut chunks = 0_usize;
    loop {
        write!(context.streams.output, "> ")?;
        let Some(mut chunk) = context.streams.read_line()? else {
            break;
        };

        if opens_block(&chunk) {
            loop {
                write!(context.streams.output, ". ")?;
                match context.streams.read_line()? {
                    Some(line) if !line.trim().is_empty() => {
                        chunk.push('\n');
                        chunk.push_str(&line);
                    },
                    _ => break,
                }
            }
        }

        chunks += 1;
        evaluate_chunk(context, &format!("<repl:{chunks}>"), &chunk)?;
    }

    writeln!(context.streams.output)?;
    debug!(target: "eval", "interactive session ended after {chunks} chunks");
    Ok(())
}

fn opens_block(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|word| BLOCK_OPENERS.contains(&word))
}

/// Lexes a chunk, then parses and evaluates it one statement at a time.
///
/// The first failure is reported and the rest of the chunk is dropped.
fn evaluate_chunk(context: &mut Context, name: &str, text: &str) -> io::Result<()> {
    let lexed = match tokenize(name, text) {
        Ok(tokens) => tokens,
        Err(e) => return writeln!(context.streams.error, "{}", ProgramError::from(e)),
    };

    let mut tokens = lexed.iter().peekable();
    while let Some(line) = next_line(&mut tokens) {
        let result = parse_statement(line, &mut tokens).map_err(ProgramError::from)
                                                       .and_then(|node| {
                                                           let root = context.root();
                                                           context.eval(&node, root)
                                                                  .map_err(ProgramError::from)
                                                       });

        match result {
            Ok(Value::Nil) => {},
            Ok(value) => writeln!(context.streams.output, "=> {value}")?,
            Err(e) => return writeln!(context.streams.error, "{e}"),
        }
    }

    Ok(())
}
