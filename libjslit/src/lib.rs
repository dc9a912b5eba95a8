//! Parser for JavaScript object literals.
//!
//! Accepts a single literal in the syntax JavaScript allows for primary
//! expressions: `null`, booleans, numbers, strings, arrays and objects. This
//! is a superset of JSON with unquoted and Unicode identifier keys, single
//! quotes, `0b`/`0o`/`0x` prefixes, `_` separators, BigInt suffixes and
//! array elisions.
//!
//! # Parsing
//!
//! There is no tokenizer. A cursor walks the input one
//! Unicode scalar value at a time and a recursive-descent dispatcher hands
//! off to one recognizer per kind of literal. The first error ends the parse.
//!
//! # Example
//!
//! ```
//! use libjslit::{parse, Value};
//!
//! let value = parse("{name: 'jslit', tags: ['a',, 'b'], size: 0x1_00n}").unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("jslit"));
//! assert_eq!(value.get("size").and_then(Value::as_i64), Some(256));
//! assert!(value.get("tags").unwrap().get_index(1).is_none());
//! ```

mod array;
mod cursor;
mod error;
mod ident;
mod number;
mod object;
mod parser;
mod string;
mod value;

use tracing::debug;

pub use error::{ErrorKind, ParseError, Result};
pub use value::{Key, Object, Value};

/// Parse a literal from a string.
///
/// Surrounding whitespace is ignored, and blank input parses as
/// [`Value::Null`]. The whole input must be a single literal.
///
/// # Example
///
/// ```
/// use libjslit::parse;
///
/// let err = parse("null,").unwrap_err();
/// assert_eq!(err.to_string(), "Unexpected char ',' at 4");
/// ```
pub fn parse(input: &str) -> Result<Value> {
    if input.trim_matches(cursor::is_whitespace).is_empty() {
        return Ok(Value::Null);
    }

    debug!(len = input.len(), "parsing literal");
    let mut cur = cursor::Cursor::new(input);
    let result = parser::parse_expression(&mut cur).and_then(|value| {
        if cur.at_end() {
            Ok(value)
        } else {
            Err(cur.unexpected_char())
        }
    });

    if let Err(e) = &result {
        debug!(offset = e.offset(), error = %e, "parse failed");
    }
    result
}
