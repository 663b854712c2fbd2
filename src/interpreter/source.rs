use std::io::{self, BufRead};

/// A supplier of source lines.
///
/// The lexer pulls one physical line at a time and does not care whether the
/// lines come from a file, a string, or an interactive session.
pub trait Source {
    /// Name of the source, used in token spans and error messages.
    fn name(&self) -> &str;

    /// Returns the next line without its line terminator, or `None` at the end
    /// of input.
    ///
    /// # Errors
    /// Returns an error if the underlying reader fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines of an in-memory string.
///
/// # Example
/// ```
/// use boomslang::interpreter::source::{Source, StrSource};
///
/// let mut source = StrSource::new("<test>", "first\nsecond");
///
/// assert_eq!(source.read_line().unwrap().as_deref(), Some("first"));
/// assert_eq!(source.read_line().unwrap().as_deref(), Some("second"));
/// assert_eq!(source.read_line().unwrap(), None);
/// ```
pub struct StrSource<'a> {
    name:  String,
    lines: std::str::Lines<'a>,
}

impl<'a> StrSource<'a> {
    #[must_use]
    pub fn new(name: &str, text: &'a str) -> Self {
        Self { name:  name.to_string(),
               lines: text.lines(), }
    }
}

impl Source for StrSource<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.next().map(str::to_string))
    }
}

/// Lines of any buffered reader, such as an opened script file.
///
/// The last line is returned even when the input does not end with a newline.
pub struct ReaderSource<R> {
    name:   String,
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(name: &str, reader: R) -> Self {
        Self { name: name.to_string(),
               reader }
    }
}

impl<R: BufRead> Source for ReaderSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_terminator(&mut line);
        Ok(Some(line))
    }
}

/// Removes a trailing `\n` or `\r\n` in place.
pub(crate) fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
