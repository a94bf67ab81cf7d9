// This file is part of bootsh, a POSIX shell for scripted boot menus.
// Copyright (C) 2024 The bootsh developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Methods about passing source code to the [parser](crate::parser).
//!
//! The parser consumes an abstract character-stream provider rather than a
//! concrete file handle. An [`Input`] implementor supplies one line at a
//! time; the [lexer](crate::parser::lex::Lexer) buffers the characters and
//! hands them to the grammar engine. [`Memory`] reads from a string already
//! in memory, which also backs the nested sub-parses performed for
//! backquoted command substitution and here-document line expansion.

use std::io::Read;

/// Error returned by the [`Input`] function.
pub type Error = std::io::Error;

/// Result of the [`Input`] function.
pub type Result = std::result::Result<String, Error>;

/// Line-oriented source code reader
///
/// An `Input` implementor provides the parser with source code by reading
/// from an underlying source.
#[must_use = "Input instances should be used by a parser"]
pub trait Input {
    /// Reads a next line of the source code.
    ///
    /// The input function is line-oriented; this function returns a string
    /// terminated by a newline unless the end of input is reached, in which
    /// case the remaining characters up to the end are returned without a
    /// trailing newline. If there are no more characters at all, the
    /// returned line is empty.
    ///
    /// Errors returned from this function are considered unrecoverable. Once
    /// an error is returned, this function should not be called any more.
    fn next_line(&mut self) -> Result;
}

impl<T: Input + ?Sized> Input for &mut T {
    fn next_line(&mut self) -> Result {
        (**self).next_line()
    }
}

impl<T: Input + ?Sized> Input for Box<T> {
    fn next_line(&mut self) -> Result {
        (**self).next_line()
    }
}

/// Input function that reads from a string in memory.
pub struct Memory<'a> {
    lines: std::str::SplitInclusive<'a, char>,
}

impl Memory<'_> {
    /// Creates a new `Memory` that reads the given string.
    pub fn new(code: &str) -> Memory<'_> {
        let lines = code.split_inclusive('\n');
        Memory { lines }
    }
}

impl<'a> From<&'a str> for Memory<'a> {
    fn from(code: &'a str) -> Memory<'a> {
        Memory::new(code)
    }
}

impl Input for Memory<'_> {
    fn next_line(&mut self) -> Result {
        Ok(self.lines.next().unwrap_or("").to_owned())
    }
}

/// Input function that reads lines from an [`io::Read`](Read) stream.
///
/// The reader is consumed byte by byte so that no characters beyond the
/// current line are taken from the underlying stream. Non-UTF-8 input is an
/// error.
pub struct Reader<R: Read> {
    inner: R,
}

impl<R: Read> Reader<R> {
    /// Creates a new `Reader` that reads the given stream.
    pub fn new(inner: R) -> Self {
        Reader { inner }
    }
}

impl<R: Read> Input for Reader<R> {
    fn next_line(&mut self) -> Result {
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte)? {
                0 => break,
                _ => {
                    bytes.push(byte[0]);
                    if byte[0] == b'\n' {
                        break;
                    }
                }
            }
        }
        String::from_utf8(bytes)
            .map_err(|e| Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_empty_source() {
        let mut input = Memory::new("");
        assert_eq!(input.next_line().unwrap(), "");
    }

    #[test]
    fn memory_one_line() {
        let mut input = Memory::new("one\n");
        assert_eq!(input.next_line().unwrap(), "one\n");
        assert_eq!(input.next_line().unwrap(), "");
    }

    #[test]
    fn memory_three_lines() {
        let mut input = Memory::new("one\ntwo\nthree");
        assert_eq!(input.next_line().unwrap(), "one\n");
        assert_eq!(input.next_line().unwrap(), "two\n");
        assert_eq!(input.next_line().unwrap(), "three");
        assert_eq!(input.next_line().unwrap(), "");
    }

    #[test]
    fn reader_splits_lines() {
        let mut input = Reader::new(&b"menu\nentry"[..]);
        assert_eq!(input.next_line().unwrap(), "menu\n");
        assert_eq!(input.next_line().unwrap(), "entry");
        assert_eq!(input.next_line().unwrap(), "");
    }
}
