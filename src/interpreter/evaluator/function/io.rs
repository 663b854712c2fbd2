use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        streams::Streams,
        value::core::Value,
    },
};

/// Writes the display text of every argument to the output stream.
///
/// Arguments are separated by a single space and followed by a newline; with
/// no arguments only the newline is written.
///
/// # Returns
/// Always `nothing`.
///
/// # Example
/// ```
/// use boomslang::interpreter::{evaluator::function::io::show, streams::Streams, value::core::Value};
///
/// let (mut streams, output, _) = Streams::captured("");
/// let r = show(&mut streams, &[Value::Integer(1), Value::from("two")]).unwrap();
///
/// assert_eq!(r, Value::Nil);
/// assert_eq!(output.contents(), "1 two\n");
/// ```
pub fn show(streams: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    let text = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    writeln!(streams.output, "{text}").map_err(RuntimeError::from)?;

    Ok(Value::Nil)
}

/// Writes the debug representation of every argument, one per line.
///
/// # Returns
/// The first argument, or `nothing` if there is none.
pub fn debug(streams: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        writeln!(streams.output, "{arg:?}").map_err(RuntimeError::from)?;
    }

    Ok(args.first().cloned().unwrap_or(Value::Nil))
}

/// Reads one line from the input stream.
///
/// If an argument is given, its display text is written first as a prompt,
/// without a newline.
///
/// # Returns
/// The line read, as text, without its line terminator.
///
/// # Errors
/// Returns a [`RuntimeError::IoError`] at the end of input or if reading
/// fails.
///
/// # Example
/// ```
/// use boomslang::interpreter::{evaluator::function::io::ask, streams::Streams, value::core::Value};
///
/// let (mut streams, output, _) = Streams::captured("Ada\n");
/// let r = ask(&mut streams, &[Value::from("name? ")]).unwrap();
///
/// assert_eq!(r, Value::from("Ada"));
/// assert_eq!(output.contents(), "name? ");
/// assert!(ask(&mut streams, &[]).is_err());
/// ```
pub fn ask(streams: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    if let Some(prompt) = args.first() {
        write!(streams.output, "{prompt}").map_err(RuntimeError::from)?;
    }

    match streams.read_line().map_err(RuntimeError::from)? {
        Some(line) => Ok(Value::from(line)),
        None => Err(RuntimeError::IoError { details: "the input ended before an answer was given".to_string() }.into()),
    }
}

/// Converts a value to a number.
///
/// - Numbers are returned unchanged.
/// - Text is trimmed and read as a whole number.
/// - `true` and `false` become `1` and `0`.
///
/// # Errors
/// Returns a [`RuntimeError::TypeError`] for text that is not a whole number
/// and for every other kind of value.
///
/// # Example
/// ```
/// use boomslang::interpreter::{evaluator::function::io::number, streams::Streams, value::core::Value};
///
/// let (mut streams, ..) = Streams::captured("");
///
/// assert_eq!(number(&mut streams, &[Value::from(" 42 ")]).unwrap(), Value::Integer(42));
/// assert_eq!(number(&mut streams, &[Value::Bool(true)]).unwrap(), Value::Integer(1));
/// assert!(number(&mut streams, &[Value::from("forty-two")]).is_err());
/// ```
pub fn number(_: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    check_arity("number", args, 1)?;

    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        Value::Text(t) => t.trim()
                           .parse::<i64>()
                           .map(Value::Integer)
                           .map_err(|_| RuntimeError::type_error("number", &args[0]).into()),
        other => Err(RuntimeError::type_error("number", other).into()),
    }
}
