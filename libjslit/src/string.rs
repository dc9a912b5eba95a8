//! Quoted strings and escape sequences.
//!
//! The `\u` decoder here is shared with the identifier recognizer, which
//! accepts the same escapes in unquoted names.

use crate::cursor::Cursor;
use crate::error::{ErrorKind, Result};

/// Largest Unicode code point.
const MAX_CODE_POINT: u32 = 0x10FFFF;

const LF: char = '\u{000A}';
const CR: char = '\u{000D}';
const LS: char = '\u{2028}';
const PS: char = '\u{2029}';

pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, LF | CR | LS | PS)
}

/// Map a single-character escape (`\n`, `\'`, ...) to the character it stands for.
fn single_escape(c: char) -> Option<char> {
    match c {
        '\'' => Some('\''),
        '"' => Some('"'),
        '\\' => Some('\\'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\u{000A}'),
        'r' => Some('\u{000D}'),
        't' => Some('\u{0009}'),
        'v' => Some('\u{000B}'),
        _ => None,
    }
}

/// Parse a string opened by the quote under the cursor.
pub(crate) fn parse_string(cur: &mut Cursor<'_>) -> Result<String> {
    let terminator = match cur.current() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Err(cur.unexpected_char()),
    };
    cur.advance();

    let mut out = String::new();
    while let Some(c) = cur.current() {
        if c == terminator {
            cur.advance();
            return Ok(out);
        }

        if c == '\\' {
            cur.advance();
            parse_escape(cur, &mut out)?;
            continue;
        }

        if is_line_terminator(c) {
            return Err(cur.error(ErrorKind::UnexpectedLineTerminator {
                offset: cur.offset(),
            }));
        }

        out.push(c);
        cur.advance();
    }

    Err(cur.unexpected_end())
}

/// Decode the escape after a backslash, appending its text to `out`.
///
/// A backslash before a character with no escape meaning is dropped and the
/// character itself is left for the caller to read as ordinary content.
fn parse_escape(cur: &mut Cursor<'_>, out: &mut String) -> Result<()> {
    let Some(c) = cur.current() else {
        return Ok(());
    };

    match c {
        '0' => {
            out.push('\0');
            cur.advance();
        }
        'x' => {
            cur.advance();
            out.push(parse_hex_escape(cur)?);
        }
        'u' => {
            cur.advance();
            out.push(parse_unicode_escape(cur)?);
        }
        _ => {
            if let Some(escaped) = single_escape(c) {
                out.push(escaped);
                cur.advance();
            } else if cur.try_consume(&["\r\n"]) {
                // Line continuation keeps the terminator as written.
                out.push_str("\r\n");
            } else if is_line_terminator(c) {
                out.push(c);
                cur.advance();
            }
        }
    }
    Ok(())
}

/// Read one hex digit or fail at the character under the cursor.
fn parse_hex_digit(cur: &mut Cursor<'_>) -> Result<u32> {
    match cur.current().and_then(|c| c.to_digit(16)) {
        Some(d) => {
            cur.advance();
            Ok(d)
        }
        None => Err(cur.unexpected_char()),
    }
}

/// `\xHH`, with the cursor after the `x`. Every such value is a Latin-1
/// character, so only the digits can be wrong.
fn parse_hex_escape(cur: &mut Cursor<'_>) -> Result<char> {
    let hi = parse_hex_digit(cur)?;
    let lo = parse_hex_digit(cur)?;
    Ok(char::from((hi << 4 | lo) as u8))
}

/// `\uHHHH` or `\u{H...}`, with the cursor after the `u`.
///
/// Errors about the escape as a whole are anchored at its backslash.
pub(crate) fn parse_unicode_escape(cur: &mut Cursor<'_>) -> Result<char> {
    let start = cur.position().saturating_sub(2);
    let code = if cur.current() == Some('{') {
        parse_code_point(cur, start)?
    } else {
        parse_hex4(cur, start)?
    };

    if code > MAX_CODE_POINT {
        return Err(cur.invalid_unicode_escape(start));
    }
    // Surrogates are not scalar values.
    char::from_u32(code).ok_or_else(|| cur.invalid_unicode_escape(start))
}

/// `{H...}`: one or more hex digits. Overlong values saturate and are
/// rejected by the range check.
fn parse_code_point(cur: &mut Cursor<'_>, start: usize) -> Result<u32> {
    cur.advance();
    let mut code: u32 = 0;
    let mut digits = 0;
    while cur.current() != Some('}') {
        let d = parse_hex_digit(cur)?;
        code = code.saturating_mul(16).saturating_add(d);
        digits += 1;
    }
    cur.advance();

    if digits == 0 {
        return Err(cur.invalid_unicode_escape(start));
    }
    Ok(code)
}

/// Exactly four hex digits.
fn parse_hex4(cur: &mut Cursor<'_>, start: usize) -> Result<u32> {
    let mut code = 0;
    for _ in 0..4 {
        match cur.current().and_then(|c| c.to_digit(16)) {
            Some(d) => {
                code = code << 4 | d;
                cur.advance();
            }
            None => return Err(cur.invalid_unicode_escape(start)),
        }
    }
    Ok(code)
}
