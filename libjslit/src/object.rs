//! Object literals.

use num_bigint::BigUint;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::ident::{at_unicode_escape, is_id_start, parse_identifier_name};
use crate::number::{digits_value, read_digits, Radix};
use crate::parser::parse_expression;
use crate::string::parse_string;
use crate::value::{Key, Object, Value};

/// Parse an object opened by the `{` under the cursor.
///
/// Later duplicates of a key replace the value but keep the key's first
/// position.
pub(crate) fn parse_object(cur: &mut Cursor<'_>) -> Result<Value> {
    cur.advance();
    cur.skip_whitespace();

    let mut object = Object::new();
    while cur.current() != Some('}') {
        let key = parse_key(cur)?;

        cur.skip_whitespace();
        if cur.current() != Some(':') {
            return Err(cur.expected_char(':'));
        }
        cur.advance();
        cur.skip_whitespace();

        let value = parse_expression(cur)?;
        object.insert(key, value);

        cur.skip_whitespace();
        match cur.current() {
            None => return Err(cur.unexpected_end()),
            Some('}') => break,
            Some(',') => {
                cur.advance();
                cur.skip_whitespace();
            }
            Some(_) => return Err(cur.expected_char(',')),
        }
    }
    cur.advance();

    Ok(Value::Object(object))
}

fn parse_key(cur: &mut Cursor<'_>) -> Result<Key> {
    match cur.current() {
        Some(c) if c.is_ascii_digit() || c == '.' => {
            let digits = read_digits(cur, Radix::Decimal)?;
            if digits.is_empty() {
                return Ok(Key::Index(BigUint::default()));
            }
            Ok(Key::Index(digits_value(&digits, Radix::Decimal)))
        }
        Some('"' | '\'') => Ok(Key::Name(parse_string(cur)?)),
        Some(c) if is_id_start(c) || at_unicode_escape(cur) => {
            Ok(Key::Name(parse_identifier_name(cur)?))
        }
        _ => Err(cur.unexpected_char()),
    }
}
