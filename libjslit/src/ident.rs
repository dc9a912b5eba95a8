//! Identifier names.
//!
//! Names are classified by Unicode general category: letters and letter
//! numbers start a name; marks, decimal numbers and connector punctuation
//! may follow. On top of that come the ASCII specials `$` and `_`, the
//! legacy Other_ID_Start / Other_ID_Continue code points and the zero-width
//! joiners. `\u` escapes may spell any character of the name.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::cursor::Cursor;
use crate::error::Result;
use crate::string::parse_unicode_escape;

const OTHER_ID_START: [char; 4] = ['\u{2118}', '\u{212E}', '\u{309B}', '\u{309C}'];
const OTHER_ID_CONTINUE: [char; 4] = ['\u{1369}', '\u{00B7}', '\u{0387}', '\u{19DA}'];

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

pub(crate) fn is_id_start(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c == '$'
        || c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::LetterNumber
        )
        || OTHER_ID_START.contains(&c)
}

pub(crate) fn is_id_continue(c: char) -> bool {
    is_id_start(c)
        || c.is_ascii_digit()
        || matches!(
            get_general_category(c),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::DecimalNumber
                | GeneralCategory::ConnectorPunctuation
        )
        || OTHER_ID_CONTINUE.contains(&c)
        || c == ZWNJ
        || c == ZWJ
}

/// Whether the cursor is at a `\u` escape.
pub(crate) fn at_unicode_escape(cur: &Cursor<'_>) -> bool {
    cur.current() == Some('\\') && cur.ahead() == Some('u')
}

/// Read an identifier name at the cursor.
///
/// Returns an empty string, without moving, when no name starts here.
pub(crate) fn parse_identifier_name(cur: &mut Cursor<'_>) -> Result<String> {
    let mut name = String::new();

    match read_char(cur, is_id_start)? {
        Some(c) => name.push(c),
        None => return Ok(name),
    }
    while let Some(c) = read_char(cur, is_id_continue)? {
        name.push(c);
    }

    Ok(name)
}

/// Read one character accepted by `legal`, literal or `\u`-escaped.
///
/// An escape that decodes to an illegal character fails the whole parse,
/// anchored at the escape's backslash.
fn read_char(cur: &mut Cursor<'_>, legal: fn(char) -> bool) -> Result<Option<char>> {
    let start = cur.position();
    if cur.try_consume(&["\\u"]) {
        let c = parse_unicode_escape(cur)?;
        if !legal(c) {
            return Err(cur.invalid_unicode_escape(start));
        }
        return Ok(Some(c));
    }

    match cur.current() {
        Some(c) if legal(c) => {
            cur.advance();
            Ok(Some(c))
        }
        _ => Ok(None),
    }
}
