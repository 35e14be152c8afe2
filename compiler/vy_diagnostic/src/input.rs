//! Errors in structured compiler input.
//!
//! Positions here refer to the input document (for example a JSON request),
//! not to the compiled source, so this type stays apart from
//! [`Diagnostic`](crate::Diagnostic) and never renders a source excerpt.

use std::fmt;

/// Malformed structured input to the compiler.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InputFormatError {
    pub message: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl InputFormatError {
    pub fn new(message: impl Into<String>) -> Self {
        InputFormatError {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Locate the error within the input document.
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for InputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "line {line}:{column} {}", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for InputFormatError {}

/// Decode failures keep serde_json's position; a line of `0` means the
/// failure has no location in the document (e.g. an I/O error).
impl From<serde_json::Error> for InputFormatError {
    fn from(err: serde_json::Error) -> Self {
        let line = u32::try_from(err.line()).ok().filter(|&line| line > 0);
        let column = u32::try_from(err.column()).ok();

        // serde_json appends the position; it is rendered from the fields.
        let text = err.to_string();
        let suffix = format!(" at line {} column {}", err.line(), err.column());
        let description = text.strip_suffix(suffix.as_str()).unwrap_or(&text);

        let message = match err.classify() {
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                format!("Invalid JSON: {description}")
            }
            serde_json::error::Category::Data => format!("Invalid input: {description}"),
            serde_json::error::Category::Io => format!("Could not read input: {description}"),
        };
        InputFormatError {
            message,
            line,
            column: line.and(column),
        }
    }
}
