use std::fmt;

use crate::{
    error::LexError,
    interpreter::lexer::{LexResult, Span},
};

/// The leading whitespace of a physical line.
///
/// Counts are measured before anything else on the line is looked at. A
/// source indents with tabs or with spaces, never both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indent {
    /// Number of leading tab characters.
    pub tabs:   usize,
    /// Number of leading space characters.
    pub spaces: usize,
}

impl Indent {
    /// Splits the leading tabs and spaces off `line`.
    ///
    /// # Example
    /// ```
    /// use boomslang::interpreter::lexer::indent::Indent;
    ///
    /// let (indent, rest) = Indent::measure("    show the x");
    ///
    /// assert_eq!(indent, Indent { tabs: 0, spaces: 4 });
    /// assert_eq!(rest, "show the x");
    /// ```
    #[must_use]
    pub fn measure(line: &str) -> (Self, &str) {
        let mut indent = Self::default();
        let rest = line.trim_start_matches(|c: char| match c {
                           '\t' => {
                               indent.tabs += 1;
                               true
                           },
                           ' ' => {
                               indent.spaces += 1;
                               true
                           },
                           _ => false,
                       });
        (indent, rest)
    }

    /// Returns `true` if the line is not indented at all.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.tabs == 0 && self.spaces == 0
    }

    /// Returns `true` if the line is indented with both tabs and spaces.
    #[must_use]
    pub const fn is_mixed(&self) -> bool {
        self.tabs > 0 && self.spaces > 0
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn plural(n: usize, word: &str) -> String {
            if n == 1 {
                format!("{n} {word}")
            } else {
                format!("{n} {word}s")
            }
        }

        match (self.tabs, self.spaces) {
            (0, spaces) => write!(f, "{}", plural(spaces, "space")),
            (tabs, 0) => write!(f, "{}", plural(tabs, "tab")),
            (tabs, spaces) => write!(f, "{} and {}", plural(tabs, "tab"), plural(spaces, "space")),
        }
    }
}

/// Translates an indentation amount into an indentation level.
///
/// `unit` is the shift unit fixed by the first indented line of the source.
/// The amount must use the same kind of whitespace as the unit and be a whole
/// multiple of it.
///
/// # Parameters
/// - `indent`: The indentation of the current line.
/// - `unit`: The shift unit of the source; must be non-zero and unmixed.
/// - `span`: The location of the current line, for error reporting.
///
/// # Returns
/// The indentation level, `indent / unit`.
///
/// # Example
/// ```
/// use boomslang::interpreter::lexer::{Span, indent::{Indent, translate}};
///
/// let unit = Indent { tabs: 0, spaces: 2 };
/// let span = Span::new("<test>", 1);
///
/// assert_eq!(translate(Indent { tabs: 0, spaces: 6 }, unit, &span).unwrap(), 3);
/// assert!(translate(Indent { tabs: 0, spaces: 3 }, unit, &span).is_err());
/// assert!(translate(Indent { tabs: 1, spaces: 0 }, unit, &span).is_err());
/// ```
pub fn translate(indent: Indent, unit: Indent, span: &Span) -> LexResult<usize> {
    if indent.is_mixed() {
        return Err(LexError::MixedIndentation { span: span.clone() });
    }

    let (amount, step) = match (unit.tabs, unit.spaces) {
        (0, spaces) if indent.tabs == 0 => (indent.spaces, spaces),
        (tabs, 0) if indent.spaces == 0 => (indent.tabs, tabs),
        _ => return Err(LexError::MixedIndentation { span: span.clone() }),
    };

    if amount % step != 0 {
        return Err(LexError::InconsistentIndentation { found: indent,
                                                       unit,
                                                       span: span.clone() });
    }

    Ok(amount / step)
}
