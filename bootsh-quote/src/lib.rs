// This file is part of bootsh, a POSIX shell for scripted boot menus.
// Copyright (C) 2024 The bootsh developers

//! This crate provides functions that quote a string according to the POSIX
//! shell quoting rules.
//!
//! When the result is used in a shell script, it expands to a single field
//! having the same value as the original string.
//!
//! POSIX specifies several types of quoting mechanisms we can use. This crate
//! picks one according to the following decision rules:
//!
//! - If the string is not empty and contains no characters that need quoting,
//!   the string is returned intact.
//! - Otherwise, if the string contains no single quote, the whole string is
//!   single-quoted.
//! - Otherwise, the whole string is double-quoted, and all occurrences of
//!   `"`, `` ` ``, `$`, and `\` are backslash-escaped.
//!
//! The following characters need quoting:
//!
//! - `;`, `&`, `|`, `(`, `)`, `<`, and `>`
//! - A space, tab, newline, or any other whitespace character
//! - `$`, `` ` ``, `\`, `"`, and `'`
//! - `=`, `*`, `?`, `#`, `~`, `{`, `}`, `[`, and `]`
//!
//! # Examples
//!
//! ```
//! # use bootsh_quote::quoted;
//! assert_eq!(format!("value={}", quoted("foo")), "value=foo");
//! assert_eq!(format!("value={}", quoted("")), "value=''");
//! assert_eq!(format!("value={}", quoted("$foo")), "value='$foo'");
//! assert_eq!(format!("value={}", quoted("'$foo'")), r#"value="'\$foo'""#);
//! ```
//!
//! ```
//! # use bootsh_quote::quote;
//! assert_eq!(quote("foo"), "foo");
//! assert_eq!(quote(""), "''");
//! assert_eq!(quote("$foo"), "'$foo'");
//! assert_eq!(quote("'$foo'"), r#""'\$foo'""#);
//! ```

use std::borrow::Cow::{self, Borrowed, Owned};
use std::fmt::{self, Display, Write as _};

#[must_use]
fn char_needs_quoting(c: char) -> bool {
    match c {
        ';' | '&' | '|' | '(' | ')' | '<' | '>' => true,
        '$' | '`' | '\\' | '"' | '\'' | '=' | '*' | '?' => true,
        '#' | '~' | '{' | '}' | '[' | ']' => true,
        _ => c.is_whitespace(),
    }
}

#[must_use]
fn str_needs_quoting(s: &str) -> bool {
    s.is_empty() || s.chars().any(char_needs_quoting)
}

/// Wrapper of [`str`] that displays the quoted version of the string
///
/// See the [crate documentation](self) for details.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use = "`Quoted` does nothing unless displayed"]
pub struct Quoted<'a> {
    raw: &'a str,
}

impl Quoted<'_> {
    /// Returns the original string.
    #[must_use]
    pub fn as_raw(&self) -> &str {
        self.raw
    }
}

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !str_needs_quoting(self.raw) {
            return f.write_str(self.raw);
        }

        if !self.raw.contains('\'') {
            return write!(f, "'{}'", self.raw);
        }

        f.write_char('"')?;
        for c in self.raw.chars() {
            if matches!(c, '"' | '`' | '$' | '\\') {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

impl<'a> From<&'a str> for Quoted<'a> {
    fn from(raw: &'a str) -> Quoted<'a> {
        Quoted { raw }
    }
}

/// Wraps a string in [`Quoted`].
///
/// This function is a synonym for `Quoted::from`.
#[inline]
pub fn quoted(raw: &str) -> Quoted<'_> {
    Quoted::from(raw)
}

/// Quotes the argument.
///
/// If the argument needs no quoting, the return value is `Borrowed(raw)`.
/// Otherwise, it is `Owned(_)` containing the quoted string.
#[must_use]
pub fn quote(raw: &str) -> Cow<'_, str> {
    if str_needs_quoting(raw) {
        Owned(quoted(raw).to_string())
    } else {
        Borrowed(raw)
    }
}
