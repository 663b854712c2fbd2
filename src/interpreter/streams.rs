use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
};

use crate::interpreter::source::strip_terminator;

/// The outside world as seen by a running program.
///
/// Builtins never touch the process's standard streams directly; they write
/// to and read from the streams held here, which are handed to them on every
/// invocation. The same input reader serves both the interactive prompt and
/// the `ask` procedure.
pub struct Streams {
    /// Where `show` and `debug` write.
    pub output: Box<dyn Write>,
    /// Where diagnostics are written.
    pub error:  Box<dyn Write>,
    /// Where `ask` and the interactive prompt read lines from.
    pub input:  Box<dyn BufRead>,
}

impl Streams {
    /// Streams connected to the process's stdin, stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self { output: Box::new(io::stdout()),
               error:  Box::new(io::stderr()),
               input:  Box::new(io::BufReader::new(io::stdin())), }
    }

    /// Streams that read from `input` and collect everything written.
    ///
    /// Output and error text both end up in the returned [`CapturedOutput`]
    /// handles, in that order.
    ///
    /// # Example
    /// ```
    /// use std::io::Write;
    ///
    /// use boomslang::interpreter::streams::Streams;
    ///
    /// let (mut streams, output, _) = Streams::captured("first\nsecond\n");
    ///
    /// assert_eq!(streams.read_line().unwrap().as_deref(), Some("first"));
    /// write!(streams.output, "hello").unwrap();
    /// assert_eq!(output.contents(), "hello");
    /// ```
    #[must_use]
    pub fn captured(input: &str) -> (Self, CapturedOutput, CapturedOutput) {
        let output = CapturedOutput::default();
        let error = CapturedOutput::default();
        let streams = Self { output: Box::new(output.clone()),
                             error:  Box::new(error.clone()),
                             input:  Box::new(io::Cursor::new(input.as_bytes().to_vec())), };
        (streams, output, error)
    }

    /// Reads one line of input without its terminator.
    ///
    /// Returns `None` at the end of input. Pending output is flushed first so
    /// that prompts appear before the program blocks.
    ///
    /// # Errors
    /// Returns an error if flushing the output or reading the input fails.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_terminator(&mut line);
        Ok(Some(line))
    }
}

/// A shared in-memory sink, used to observe what a program wrote.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput(Rc<RefCell<Vec<u8>>>);

impl CapturedOutput {
    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
