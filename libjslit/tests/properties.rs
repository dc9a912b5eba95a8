//! Property tests for literal parsing.
//!
//! Generates literals and checks them against values computed directly:
//! 1. Digit separators never change an integer's value, in any radix
//! 2. The BigInt suffix is dropped
//! 3. Strings without escapes come back verbatim, and `\u{...}` decodes
//! 4. Leading whitespace shifts error offsets one for one

use libjslit::{parse, Value};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Render `n` in `radix` with a `_` after each digit flagged in `splits`.
fn with_separators(n: u64, radix: u32, splits: &[bool]) -> String {
    let digits = match radix {
        2 => format!("{:b}", n),
        8 => format!("{:o}", n),
        16 => format!("{:x}", n),
        _ => n.to_string(),
    };
    let mut out = String::new();
    let last = digits.len() - 1;
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        if i < last && splits.get(i).copied().unwrap_or(false) {
            out.push('_');
        }
    }
    out
}

fn prefix(radix: u32) -> &'static str {
    match radix {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => "",
    }
}

fn integer(n: u64) -> Value {
    Value::Integer(BigInt::from(n))
}

proptest! {
    #[test]
    fn separators_preserve_value(
        n in any::<u64>(),
        radix in prop::sample::select(vec![2u32, 8, 10, 16]),
        splits in prop::collection::vec(any::<bool>(), 64),
    ) {
        let literal = format!("{}{}", prefix(radix), with_separators(n, radix, &splits));
        prop_assert_eq!(parse(&literal).unwrap(), integer(n), "literal {}", literal);
    }

    #[test]
    fn bigint_suffix_is_dropped(
        n in any::<u64>(),
        radix in prop::sample::select(vec![2u32, 8, 10, 16]),
    ) {
        let literal = format!("{}{}", prefix(radix), with_separators(n, radix, &[]));
        let plain = parse(&literal).unwrap();
        let suffixed = parse(&format!("{}n", literal)).unwrap();
        prop_assert_eq!(plain, suffixed);
    }

    #[test]
    fn plain_strings_round_trip(s in "[^'\\\\\n\r\u{2028}\u{2029}]*") {
        let literal = format!("'{}'", s);
        prop_assert_eq!(parse(&literal).unwrap(), Value::String(s));
    }

    #[test]
    fn code_point_escapes_decode(c in any::<char>()) {
        let literal = format!("\"\\u{{{:x}}}\"", c as u32);
        prop_assert_eq!(parse(&literal).unwrap(), Value::String(c.to_string()));
    }

    #[test]
    fn leading_whitespace_shifts_offsets(pad in "[ \t\n\r]{0,16}") {
        let input = format!("{}[1 2]", pad);
        let err = parse(&input).unwrap_err();
        prop_assert_eq!(err.offset(), pad.chars().count() + 3);
    }
}

#[test]
fn test_with_separators() {
    assert_eq!(with_separators(0x1ab, 16, &[true, true]), "1_a_b");
    assert_eq!(with_separators(5, 2, &[false, true, true]), "10_1");
    assert_eq!(with_separators(7, 10, &[true]), "7");
}

#[test]
fn test_nested_arrays_and_objects() {
    let depth = 64;
    let mut input = String::new();
    for _ in 0..depth {
        input.push_str("{a: [");
    }
    input.push_str("null");
    for _ in 0..depth {
        input.push_str("]}");
    }

    let mut value = parse(&input).unwrap();
    for _ in 0..depth {
        let inner = value.get("a").and_then(|a| a.get_index(0)).unwrap().clone();
        value = inner;
    }
    assert_eq!(value, Value::Null);
}
