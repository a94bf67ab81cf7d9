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

//! Syntax parser for the `for` loop.

use super::core::{Parser, Result};
use super::error::SyntaxError;
use crate::syntax::ForClause;

impl Parser<'_> {
    /// Parses a `for` loop.
    pub(crate) fn for_clause(&mut self) -> Result<Option<ForClause>> {
        let Some(for_range) = self.lexer.eat_token("for")? else {
            return Ok(None);
        };

        let name_len = self.lexer.peek_name_len()?;
        if name_len == 0 {
            return Err(self.error_here(SyntaxError::ExpectedName));
        }
        let (name, name_range) = self.lexer.read_token(name_len)?;

        self.linebreak()?;

        let in_range = self.lexer.eat_token("in")?;
        let r#in = in_range.is_some();

        let mut word_list = Vec::new();
        if r#in {
            while let Some(word) = self.word()? {
                word_list.push(word);
            }
            if !self.sequential_sep()? {
                return Err(self.error_here(SyntaxError::ExpectedSequentialSeparator));
            }
        } else {
            self.sequential_sep()?;
        }

        let (body, do_range, done_range) = self.expect_do_group()?;

        Ok(Some(ForClause {
            name,
            r#in,
            word_list,
            body,
            for_range,
            name_range,
            in_range: in_range.unwrap_or_default(),
            do_range,
            done_range,
        }))
    }
}
