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

//! Part of the lexer that reads here-document contents.

use super::core::Lexer;
use crate::parser::error::{Error, SyntaxError};
use crate::source::Position;

impl Lexer<'_> {
    /// Reads the raw lines of a here-document body up to its delimiter.
    ///
    /// The cursor must be at the beginning of a line. Lines are read
    /// literally, one by one, until a line equals `delimiter`; with
    /// `remove_tabs`, leading tab characters are stripped from every line
    /// before the comparison and from the returned lines. The delimiter line
    /// and its newline are consumed but not returned.
    ///
    /// Reaching the end of input before the delimiter is the committed
    /// error `unterminated here-document`, reported at `op_position`.
    pub(crate) fn here_doc_lines(
        &mut self,
        delimiter: &str,
        remove_tabs: bool,
        op_position: Position,
    ) -> Result<Vec<String>, Error> {
        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            while let Some(c) = self.peek_char()? {
                if c == '\n' {
                    break;
                }
                self.read_char()?;
                line.push(c);
            }

            let content = if remove_tabs {
                line.trim_start_matches('\t')
            } else {
                line.as_str()
            };

            if content == delimiter {
                if self.peek_char()? == Some('\n') {
                    self.read_char()?;
                }
                self.consume_symbol();
                return Ok(lines);
            }

            if self.peek_char()?.is_none() {
                return Err(Error::syntax(SyntaxError::UnterminatedHereDocument, op_position));
            }
            self.read_char()?; // the newline
            lines.push(content.to_string());
        }
    }
}
