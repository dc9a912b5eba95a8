//! Numeric literals: binary, octal, hexadecimal and decimal.
//!
//! All radices accept `_` between two digits and a trailing BigInt `n`
//! (integers only). Integers are kept at arbitrary precision; anything with
//! a fraction or an exponent becomes an `f64`.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::cursor::Cursor;
use crate::error::{ErrorKind, Result};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    /// Canonical prefix, as named in error messages.
    fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }

    fn prefixes(self) -> &'static [&'static str] {
        match self {
            Radix::Binary => &["0b", "0B"],
            Radix::Octal => &["0o", "0O"],
            Radix::Decimal => &[],
            Radix::Hexadecimal => &["0x", "0X"],
        }
    }

    fn is_digit(self, c: Option<char>) -> bool {
        c.is_some_and(|c| c.is_digit(self.base()))
    }
}

/// Parse a number starting at a digit or a `.`.
pub(crate) fn parse_numeric(cur: &mut Cursor<'_>) -> Result<Value> {
    for radix in [Radix::Binary, Radix::Octal, Radix::Hexadecimal] {
        if cur.try_consume(radix.prefixes()) {
            return parse_radix_integer(cur, radix);
        }
    }
    parse_decimal(cur)
}

/// Collect a run of digits, validating `_` separators.
///
/// Separators are dropped from the result. A separator is legal only
/// between two digits of the radix; otherwise the error points at it.
pub(crate) fn read_digits(cur: &mut Cursor<'_>, radix: Radix) -> Result<String> {
    let mut digits = String::new();
    loop {
        match cur.current() {
            Some(c) if radix.is_digit(Some(c)) => digits.push(c),
            Some('_') => {
                if !radix.is_digit(cur.behind()) || !radix.is_digit(cur.ahead()) {
                    return Err(cur.unexpected_char());
                }
            }
            _ => break,
        }
        cur.advance();
    }
    Ok(digits)
}

/// Value of a validated digit string.
pub(crate) fn digits_value(digits: &str, radix: Radix) -> BigUint {
    let base = radix.base();
    digits
        .chars()
        .filter_map(|c| c.to_digit(base))
        .fold(BigUint::zero(), |acc, d| acc * base + d)
}

/// Digits after a `0b`/`0o`/`0x` prefix, with the cursor after the prefix.
fn parse_radix_integer(cur: &mut Cursor<'_>, radix: Radix) -> Result<Value> {
    let digits = read_digits(cur, radix)?;

    // BigInt suffix.
    cur.try_consume(&["n"]);

    if digits.is_empty() {
        return Err(cur.error(ErrorKind::MissingDigits {
            radix: radix.name(),
            prefix: radix.prefix(),
        }));
    }

    Ok(Value::Integer(BigInt::from(digits_value(&digits, radix))))
}

fn parse_decimal(cur: &mut Cursor<'_>) -> Result<Value> {
    let start = cur.position();
    let mut number = read_digits(cur, Radix::Decimal)?;
    let mut is_float = false;

    if cur.current() == Some('.') {
        number.push('.');
        is_float = true;
        cur.advance();
    }
    number.push_str(&read_digits(cur, Radix::Decimal)?);

    let mut has_exponent = false;
    if matches!(cur.current(), Some('e' | 'E')) {
        if number == "." {
            cur.retreat();
            return Err(cur.unexpected_char());
        }

        number.push('e');
        cur.advance();
        if let Some(sign @ ('+' | '-')) = cur.current() {
            number.push(sign);
            cur.advance();
        }

        let exponent = read_digits(cur, Radix::Decimal)?;
        if exponent.is_empty() {
            cur.seek(start);
            return Err(cur.error(ErrorKind::InvalidDecimal));
        }
        number.push_str(&exponent);
        has_exponent = true;
    }

    if cur.current() == Some('n') {
        if is_float || has_exponent {
            return Err(cur.unexpected_char());
        }
        cur.advance();
    }

    if is_float || has_exponent {
        // A bare `.` reads as zero.
        if number == "." {
            number.insert(0, '0');
        }
        let f: f64 = number.parse().map_err(|_| {
            cur.seek(start);
            cur.error(ErrorKind::InvalidDecimal)
        })?;
        return Ok(Value::Float(f));
    }

    Ok(Value::Integer(BigInt::from(digits_value(&number, Radix::Decimal))))
}
