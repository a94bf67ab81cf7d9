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

//! Implementations of [`FromStr`] for the syntax types.
//!
//! These parse a string holding exactly one instance of the syntactic
//! element. They are the convenient way to get an AST in tests and in
//! callers that do not stream input.

use super::core::Parser;
use super::error::{Error, SyntaxError};
use crate::syntax::{Program, Word};
use std::str::FromStr;

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Program, Error> {
        Parser::from_memory(s).parse_program()
    }
}

impl FromStr for Word {
    type Err = Error;

    /// Parses one word; trailing input other than blanks is an error.
    fn from_str(s: &str) -> Result<Word, Error> {
        let mut parser = Parser::from_memory(s);
        let Some(word) = parser.word()? else {
            return Err(parser.error_here(SyntaxError::ExpectedWord));
        };
        if !parser.eof()? {
            return Err(parser.error_here(SyntaxError::ExpectedWord));
        }
        Ok(word)
    }
}
