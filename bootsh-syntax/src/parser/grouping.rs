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

//! Syntax parser for brace groups and subshells.

use super::core::{Parser, Result};
use crate::syntax::{BraceGroup, Subshell};

impl Parser<'_> {
    /// Parses a brace group, `{ compound-list }`.
    pub(crate) fn brace_group(&mut self) -> Result<Option<BraceGroup>> {
        let Some(lbrace) = self.lexer.eat_token("{")? else {
            return Ok(None);
        };

        let body = self.expect_compound_list()?;
        let rbrace = self.lexer.expect_token("}")?;

        Ok(Some(BraceGroup {
            body,
            lbrace_pos: lbrace.begin,
            rbrace_pos: rbrace.begin,
        }))
    }

    /// Parses a subshell, `( compound-list )`.
    pub(crate) fn subshell(&mut self) -> Result<Option<Subshell>> {
        let Some(lparen) = self.lexer.eat_token("(")? else {
            return Ok(None);
        };

        let body = self.expect_compound_list()?;
        let rparen = self.lexer.expect_token(")")?;

        Ok(Some(Subshell {
            body,
            lparen_pos: lparen.begin,
            rparen_pos: rparen.begin,
        }))
    }
}
