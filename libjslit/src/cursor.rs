//! Character cursor shared by every recognizer.
//!
//! The cursor walks the input one Unicode scalar value at a time, so offsets
//! never land inside a multi-byte sequence. It also builds the errors the
//! recognizers raise, anchoring them at the current position unless told
//! otherwise.

use crate::error::{ErrorKind, ParseError};

/// Characters skipped between tokens and trimmed from the input edges.
const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Check whether a character is skippable whitespace.
pub(crate) fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Position and lookaround over the trimmed input.
pub(crate) struct Cursor<'a> {
    /// The untrimmed input, kept for error reporting.
    source: &'a str,
    /// Scalar values of the trimmed input.
    chars: Vec<char>,
    /// Number of scalar values trimmed from the front of `source`.
    base: usize,
    position: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `source` with surrounding whitespace trimmed.
    pub fn new(source: &'a str) -> Self {
        let base = source.chars().take_while(|&c| is_whitespace(c)).count();
        let chars: Vec<char> = source.trim_matches(is_whitespace).chars().collect();
        let current = chars.first().copied();
        Self {
            source,
            chars,
            base,
            position: 0,
            current,
        }
    }

    /// The character under the cursor, `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Position in the trimmed input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Position in the original input, as reported in errors.
    pub fn offset(&self) -> usize {
        self.base + self.position
    }

    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// The character before the cursor.
    pub fn behind(&self) -> Option<char> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.chars.get(i))
            .copied()
    }

    /// The character after the cursor.
    pub fn ahead(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    pub fn advance(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
        self.refresh();
    }

    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.refresh();
    }

    /// Jump to an absolute position. Positions past the end clamp to the end.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.chars.len());
        self.refresh();
    }

    fn refresh(&mut self) {
        self.current = self.chars.get(self.position).copied();
    }

    /// Consume the first candidate that matches at the cursor.
    ///
    /// Candidates are compared character by character; on no match the
    /// cursor does not move.
    pub fn try_consume(&mut self, candidates: &[&str]) -> bool {
        for candidate in candidates {
            let rest = &self.chars[self.position..];
            let len = candidate.chars().count();
            if rest.len() >= len && candidate.chars().zip(rest).all(|(a, &b)| a == b) {
                self.seek(self.position + len);
                return true;
            }
        }
        false
    }

    pub fn skip_whitespace(&mut self) {
        while self.current.is_some_and(is_whitespace) {
            self.advance();
        }
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    /// An error of the given kind at the current position.
    pub fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.source, self.offset())
    }

    /// The character under the cursor is not allowed here.
    pub fn unexpected_char(&self) -> ParseError {
        match self.current {
            Some(found) => self.error(ErrorKind::UnexpectedChar {
                found,
                offset: self.offset(),
            }),
            None => self.unexpected_end(),
        }
    }

    /// The character under the cursor is not `expected`.
    pub fn expected_char(&self, expected: char) -> ParseError {
        match self.current {
            Some(found) => self.error(ErrorKind::ExpectedChar {
                found,
                expected,
                offset: self.offset(),
            }),
            None => self.unexpected_end(),
        }
    }

    pub fn unexpected_end(&self) -> ParseError {
        self.error(ErrorKind::UnexpectedEnd)
    }

    /// A `\u` escape starting at `start` is unusable.
    pub fn invalid_unicode_escape(&mut self, start: usize) -> ParseError {
        self.seek(start);
        self.error(ErrorKind::InvalidUnicodeEscape {
            offset: self.offset(),
        })
    }
}
