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

//! Source positions attached to syntax elements.
//!
//! A [`Position`] names a single character in the source code by byte
//! offset, line number and column number. A [`Range`] is a half-open span
//! `[begin, end)` of two positions.
//!
//! Positions are attached to AST nodes where the grammar needs them for
//! diagnostics and for [range computation](crate::syntax). Not every
//! position a node can carry is produced by every grammar rule; a position
//! that was never filled in is *invalid*, which is encoded by a zero line
//! number. Use [`Position::is_valid`] before reporting a position to a user.

use std::fmt;

/// Position of a character in source code.
///
/// The default value is invalid (all fields zero).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    /// Byte offset from the start of the input, counted from 0.
    pub offset: usize,
    /// Line number, counted from 1.
    pub line: u32,
    /// Column number in the line, counted from 1 in characters.
    pub column: u32,
}

impl Position {
    /// Tests whether this position has been filled in.
    ///
    /// A position is valid if and only if its line number is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }

    /// Returns the position of the character following this one.
    ///
    /// The resulting column is one past `self`'s; line boundaries are not
    /// inspected.
    #[must_use]
    pub(crate) fn next(&self) -> Position {
        Position {
            offset: self.offset + 1,
            line: self.line,
            column: self.column + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open span of source code, `[begin, end)`.
///
/// The default value is invalid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Range {
    /// Position of the first character of the span.
    pub begin: Position,
    /// Position just past the last character of the span.
    pub end: Position,
}

impl Range {
    /// Tests whether both ends of this range have been filled in.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.begin.is_valid() && self.end.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_invalid() {
        assert!(!Position::default().is_valid());
    }

    #[test]
    fn nonzero_line_is_valid() {
        let position = Position {
            offset: 0,
            line: 1,
            column: 1,
        };
        assert!(position.is_valid());
    }

    #[test]
    fn range_validity_requires_both_ends() {
        let valid = Position {
            offset: 3,
            line: 1,
            column: 4,
        };
        let range = Range {
            begin: valid,
            end: Position::default(),
        };
        assert!(!range.is_valid());

        let range = Range {
            begin: valid,
            end: valid.next(),
        };
        assert!(range.is_valid());
        assert_eq!(range.end.column, 5);
    }

    #[test]
    fn position_display() {
        let position = Position {
            offset: 10,
            line: 2,
            column: 5,
        };
        assert_eq!(position.to_string(), "2:5");
    }
}
