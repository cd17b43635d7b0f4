//! Renderers for the three output forms: C header, `-D` build arguments and
//! JSON.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::domain::error::{GitInfoError, Result};
use crate::domain::flat_map::FlatMap;
use crate::keys::upper_keys;
use crate::normalize::quote_literal;

/// First line of every generated header.
pub const PRAGMA_ONCE: &str = "#pragma once";

/// One `#define KEY "VALUE"` line per entry, in map order.
///
/// Keys and values are written verbatim; callers escape values first.
pub fn header_lines(map: &FlatMap) -> Vec<String> {
    map.iter()
        .map(|(k, v)| format!("#define {k} \"{v}\""))
        .collect()
}

/// Full header text: the pragma line, the upper-cased metadata defines,
/// then the hash-partition defines. No trailing newline.
pub fn header_file(git_info: &FlatMap, hash_info: &FlatMap) -> String {
    let mut lines = header_lines(&upper_keys(git_info));
    lines.extend(header_lines(hash_info));
    format!("{PRAGMA_ONCE}\n{}", lines.join("\n"))
}

/// Space-separated `-DKEY=VALUE` tokens with upper-cased keys and quoted
/// values.
pub fn build_args(map: &FlatMap) -> String {
    map.iter()
        .map(|(k, v)| format!("-D{}={}", k.to_uppercase(), quote_literal(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a build-argument string using POSIX shell word rules.
pub fn split_build_args(args: &str) -> Result<Vec<String>> {
    shlex::split(args).ok_or_else(|| GitInfoError::ShellSplit(args.to_string()))
}

/// `map` as a JSON object with sorted keys and two-space indentation.
///
/// Non-ASCII characters are written as `\uXXXX` escapes (UTF-16 surrogate
/// pairs above U+FFFF), so the file is plain ASCII.
pub fn json_document(map: &FlatMap) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::default());
    map.to_sorted().serialize(&mut ser)?;
    // Only ASCII bytes are ever written.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pretty formatter that escapes every non-ASCII character.
#[derive(Default)]
struct AsciiFormatter {
    inner: PrettyFormatter<'static>,
}

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}
