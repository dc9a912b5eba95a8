//! Expression dispatcher.
//!
//! Picks the recognizer for the literal under the cursor by looking at its
//! first character. Recognizers for compound literals call back into
//! [`parse_expression`] for their elements.

use tracing::trace;

use crate::array::parse_array;
use crate::cursor::Cursor;
use crate::error::{ErrorKind, Result};
use crate::ident::{at_unicode_escape, is_id_continue, parse_identifier_name};
use crate::number::parse_numeric;
use crate::object::parse_object;
use crate::string::parse_string;
use crate::value::Value;

const KEYWORDS: [(&str, Value); 3] = [
    ("null", Value::Null),
    ("true", Value::Bool(true)),
    ("false", Value::Bool(false)),
];

/// Parse one literal starting at the cursor.
pub(crate) fn parse_expression(cur: &mut Cursor<'_>) -> Result<Value> {
    if let Some(value) = parse_keyword(cur) {
        return Ok(value);
    }

    match cur.current() {
        Some(c) if c.is_ascii_digit() || c == '.' => parse_numeric(cur),
        Some('"' | '\'') => parse_string(cur).map(Value::String),
        Some('[') => parse_array(cur),
        Some('{') => parse_object(cur),
        _ => {
            let start = cur.position();
            let name = parse_identifier_name(cur)?;
            if name.is_empty() {
                return Err(cur.unexpected_char());
            }
            trace!(%name, "bare identifier");
            cur.seek(start);
            Err(cur.error(ErrorKind::UnexpectedIdentifier(name)))
        }
    }
}

/// `null`, `true` or `false`, when not the prefix of a longer name.
fn parse_keyword(cur: &mut Cursor<'_>) -> Option<Value> {
    let start = cur.position();
    for (word, value) in KEYWORDS {
        if !cur.try_consume(&[word]) {
            continue;
        }
        let continues = cur.current().is_some_and(is_id_continue) || at_unicode_escape(cur);
        if !continues {
            return Some(value);
        }
        cur.seek(start);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(input: &str) -> Result<Value> {
        let mut cur = Cursor::new(input);
        parse_expression(&mut cur)
    }

    fn err(input: &str) -> String {
        expr(input).unwrap_err().to_string()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(expr("null").unwrap(), Value::Null);
        assert_eq!(expr("true").unwrap(), Value::Bool(true));
        assert_eq!(expr("false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_keyword_stops_at_delimiter() {
        let mut cur = Cursor::new("null,");
        assert_eq!(parse_expression(&mut cur).unwrap(), Value::Null);
        assert_eq!(cur.current(), Some(','));
    }

    #[test]
    fn test_keyword_prefixes_are_identifiers() {
        assert_eq!(err("nullish"), "Unexpected identifier \"nullish\"");
        assert_eq!(err("true1"), "Unexpected identifier \"true1\"");
        assert_eq!(err(r"falsea"), "Unexpected identifier \"falsea\"");
        assert_eq!(err("NULL"), "Unexpected identifier \"NULL\"");
    }

    #[test]
    fn test_identifier_anchored_at_start() {
        let e = expr("  foo\"").unwrap_err();
        assert_eq!(e.to_string(), "Unexpected identifier \"foo\"");
        assert_eq!(e.offset(), 2);
        assert_eq!(err("_1"), "Unexpected identifier \"_1\"");
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(expr("0x10").unwrap().as_i64(), Some(16));
        assert_eq!(expr(".5").unwrap().as_float(), Some(0.5));
        assert_eq!(expr("'s'").unwrap().as_str(), Some("s"));
        assert!(expr("[]").unwrap().as_array().is_some());
        assert!(expr("{}").unwrap().as_object().is_some());
    }

    #[test]
    fn test_nothing_recognizable() {
        assert_eq!(err(","), "Unexpected char ',' at 0");
        assert_eq!(err("-1"), "Unexpected char '-' at 0");
        assert_eq!(err(""), "Unexpected end of input");
    }
}
