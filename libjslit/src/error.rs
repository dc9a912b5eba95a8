//! Error types for literal parsing.

use thiserror::Error;

/// Result type for literal parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// The reason a parse failed.
///
/// Offsets embedded in variants count Unicode scalar values from the start
/// of the original (untrimmed) input, the same as [`ParseError::offset`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character that cannot continue the current construct.
    #[error("Unexpected char '{found}' at {offset}")]
    UnexpectedChar { found: char, offset: usize },

    /// A character other than the one the construct requires here.
    #[error("Unexpected char '{found}' at {offset}, expected '{expected}'")]
    ExpectedChar {
        found: char,
        expected: char,
        offset: usize,
    },

    /// Input ran out before a construct was closed.
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// A bare identifier where a value was expected.
    #[error("Unexpected identifier \"{0}\"")]
    UnexpectedIdentifier(String),

    /// An unescaped line terminator inside a string.
    #[error("Unexpected line terminator at {offset}")]
    UnexpectedLineTerminator { offset: usize },

    /// A `\u` escape that is malformed, out of range, or not legal where it
    /// appears in an identifier.
    #[error("Invalid Unicode escape sequence at {offset}")]
    InvalidUnicodeEscape { offset: usize },

    /// A radix prefix with no digits after it.
    #[error("No {radix} digits after \"{prefix}\"")]
    MissingDigits {
        radix: &'static str,
        prefix: &'static str,
    },

    /// A decimal literal with an empty exponent.
    #[error("Invalid decimal")]
    InvalidDecimal,
}

/// Error returned by [`parse`](crate::parse).
///
/// Carries the message, the text that was parsed and the offset of the
/// offending character, enough to render a caret-style diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    kind: ErrorKind,
    text: String,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, text: &str, offset: usize) -> Self {
        Self {
            kind,
            text: text.to_string(),
            offset,
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The full input passed to the parser, before trimming.
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Zero-based offset of the error, in Unicode scalar values.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Zero-based line and column of the error offset.
    ///
    /// Lines are split on LF; a CR before the LF counts as a column.
    pub fn line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.text.chars().take(self.offset) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// The offending source line followed by a caret under the error column.
    pub fn snippet(&self) -> String {
        let (line, col) = self.line_col();
        let source_line = self
            .text
            .split('\n')
            .nth(line)
            .unwrap_or("")
            .trim_end_matches('\r');
        let pad: String = source_line
            .chars()
            .take(col)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{}\n{}^", source_line, pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ParseError::new(
            ErrorKind::ExpectedChar {
                found: '=',
                expected: ':',
                offset: 7,
            },
            "{\"foo\" => \"bar\"}",
            7,
        );
        assert_eq!(err.to_string(), "Unexpected char '=' at 7, expected ':'");

        let err = ParseError::new(
            ErrorKind::MissingDigits {
                radix: "binary",
                prefix: "0b",
            },
            "0b",
            2,
        );
        assert_eq!(err.to_string(), "No binary digits after \"0b\"");
    }

    #[test]
    fn test_line_col() {
        let err = ParseError::new(ErrorKind::UnexpectedEnd, "{\n  a: 1,\n  b:", 13);
        assert_eq!(err.line_col(), (2, 3));
    }

    #[test]
    fn test_snippet() {
        let err = ParseError::new(
            ErrorKind::UnexpectedChar {
                found: '2',
                offset: 3,
            },
            "[1 2]",
            3,
        );
        assert_eq!(err.snippet(), "[1 2]\n   ^");
    }

    #[test]
    fn test_snippet_second_line() {
        let err = ParseError::new(
            ErrorKind::UnexpectedIdentifier("oops".to_string()),
            "[\r\n\toops]",
            4,
        );
        assert_eq!(err.line_col(), (1, 1));
        assert_eq!(err.snippet(), "\toops]\n\t^");
    }
}
