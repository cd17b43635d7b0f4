//! Value normalization: raw collaborator values to text, and text to the
//! escaped form embedded in `-D` build arguments and header defines.

use std::fmt::Write as _;

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::domain::error::{GitInfoError, Result};
use crate::domain::flat_map::FlatMap;

/// An untyped value as handed over by a metadata collaborator.
///
/// This is the only place where values are checked at runtime. Everything
/// past [`stringify_values`] works on [`FlatMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
}

impl RawValue {
    /// Convert to text. Bytes are decoded as UTF-8; `field` names the value
    /// in the error when decoding fails.
    pub fn into_text(self, field: &str) -> Result<String> {
        match self {
            RawValue::Text(s) => Ok(s),
            RawValue::Bytes(bytes) => String::from_utf8(bytes).map_err(|_| GitInfoError::NotText {
                field: field.to_string(),
            }),
            RawValue::Integer(n) => Ok(n.to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(bytes: Vec<u8>) -> Self {
        RawValue::Bytes(bytes)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Integer(n)
    }
}

/// Stringify every value, keeping key order. Fails on the first value that
/// is not valid text.
pub fn stringify_values<K, I>(entries: I) -> Result<FlatMap>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, RawValue)>,
{
    let mut map = FlatMap::new();
    for (key, value) in entries {
        let key = key.into();
        let text = value.into_text(&key)?;
        map.insert(key, text);
    }
    Ok(map)
}

/// Whether `c` is written as-is inside a quoted literal.
///
/// Separators other than the ASCII space, control, format, private-use,
/// surrogate and unassigned code points are not printable.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}

/// Render `s` as a quoted literal.
///
/// Single quotes are used unless `s` contains a single quote and no double
/// quote. Backslashes and the chosen quote are escaped, as is every
/// character that is not [`is_printable`]: `\xNN` up to U+00FF, `\uNNNN`
/// up to U+FFFF, `\UNNNNNNNN` beyond.
pub fn quote_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let cp = c as u32;
                // Writing to a String cannot fail.
                let _ = if cp <= 0xff {
                    write!(out, "\\x{cp:02x}")
                } else if cp <= 0xffff {
                    write!(out, "\\u{cp:04x}")
                } else {
                    write!(out, "\\U{cp:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Escaped form of `s`: [`quote_literal`] with every single quote removed.
///
/// Not idempotent: escaping twice doubles the backslashes.
pub fn escape_value(s: &str) -> String {
    quote_literal(s).replace('\'', "")
}

/// Apply [`escape_value`] to every value of `map`.
pub fn escape_values(map: &FlatMap) -> FlatMap {
    map.iter().map(|(k, v)| (k, escape_value(v))).collect()
}
