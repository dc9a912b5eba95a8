//! Array literals, including elisions.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::parser::parse_expression;
use crate::value::Value;

/// Parse an array opened by the `[` under the cursor.
///
/// A comma with no element before it leaves a hole. A trailing comma does
/// not add one, but holes before it still count towards the length:
/// `[1,,]` has two slots.
pub(crate) fn parse_array(cur: &mut Cursor<'_>) -> Result<Value> {
    cur.advance();

    let mut slots: Vec<Option<Value>> = Vec::new();
    let mut index = 0usize;

    while cur.current() != Some(']') {
        cur.skip_whitespace();
        match cur.current() {
            None => return Err(cur.unexpected_end()),
            Some(',') => {
                index += 1;
                cur.advance();
                continue;
            }
            Some(']') => break,
            Some(_) => {}
        }

        let element = parse_expression(cur)?;
        if slots.len() <= index {
            slots.resize_with(index + 1, || None);
        }
        slots[index] = Some(element);

        cur.skip_whitespace();
        match cur.current() {
            None => return Err(cur.unexpected_end()),
            Some(']') => break,
            Some(',') => {}
            Some(_) => return Err(cur.expected_char(',')),
        }
        index += 1;
        cur.advance();
    }
    cur.advance();

    let len = slots.len().max(index);
    slots.resize_with(len, || None);
    Ok(Value::Array(slots))
}

#[cfg(test)]
mod tests {
    use crate::{parse, Value};

    fn debug(input: &str) -> String {
        format!("{:?}", parse(input).unwrap())
    }

    fn err(input: &str) -> String {
        parse(input).unwrap_err().to_string()
    }

    #[test]
    fn test_simple() {
        assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
        assert_eq!(debug("[ 1, 'a' , null ]"), "[1, \"a\", null]");
        assert_eq!(debug("[1,]"), "[1]");
        assert_eq!(debug("[[], [[]]]"), "[[], [[]]]");
        assert_eq!(debug("[., 1.]"), "[0.0, 1.0]");
    }

    #[test]
    fn test_holes() {
        assert_eq!(debug("[,]"), "[<empty>]");
        assert_eq!(debug("[,,]"), "[<empty>, <empty>]");
        assert_eq!(debug("[,,2,,4]"), "[<empty>, <empty>, 2, <empty>, 4]");
        assert_eq!(debug("[1,,]"), "[1, <empty>]");
        assert_eq!(debug("[ , 1 ]"), "[<empty>, 1]");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(err("["), "Unexpected end of input");
        assert_eq!(err("[1, []"), "Unexpected end of input");
        assert_eq!(err("[1"), "Unexpected end of input");
        assert_eq!(err("[,"), "Unexpected end of input");
    }

    #[test]
    fn test_bad_separators() {
        assert_eq!(err("]"), "Unexpected char ']' at 0");
        assert_eq!(err("[1, ]]"), "Unexpected char ']' at 5");
        assert_eq!(
            err("[\"foo\" => \"bar\"]"),
            "Unexpected char '=' at 7, expected ','"
        );
        assert_eq!(
            err("[\"foo\": \"bar\"]"),
            "Unexpected char ':' at 6, expected ','"
        );
        assert_eq!(err("[1 2]"), "Unexpected char '2' at 3, expected ','");
    }
}
