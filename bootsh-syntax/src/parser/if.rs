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

//! Syntax parser for the `if` conditional construct.

use super::core::{Parser, Result};
use crate::source::{Position, Range};
use crate::syntax::{BraceGroup, Command, IfClause};

impl Parser<'_> {
    /// Parses an `if` clause.
    pub(crate) fn if_clause(&mut self) -> Result<Option<IfClause>> {
        let Some(if_range) = self.lexer.eat_token("if")? else {
            return Ok(None);
        };

        let condition = self.expect_compound_list()?;
        let then_range = self.lexer.expect_token("then")?;
        let body = self.expect_compound_list()?;
        let else_part = self.else_part()?;
        let fi_range = self.lexer.expect_token("fi")?;

        Ok(Some(IfClause {
            condition,
            body,
            else_part: else_part.map(Box::new),
            if_range,
            then_range,
            fi_range,
        }))
    }

    /// Parses the `elif`/`else` continuation of an `if` clause.
    ///
    /// An `elif` becomes a nested [`IfClause`] without a `fi` of its own; an
    /// `else` becomes a [`BraceGroup`] carrying just the commands.
    fn else_part(&mut self) -> Result<Option<Command>> {
        if let Some(elif_range) = self.lexer.eat_token("elif")? {
            let condition = self.expect_compound_list()?;
            let then_range = self.lexer.expect_token("then")?;
            let body = self.expect_compound_list()?;
            let else_part = self.else_part()?;

            return Ok(Some(Command::If(IfClause {
                condition,
                body,
                else_part: else_part.map(Box::new),
                if_range: elif_range,
                then_range,
                fi_range: Range::default(),
            })));
        }

        if self.lexer.eat_token("else")?.is_some() {
            let body = self.expect_compound_list()?;
            // The brace positions have no source to point at.
            return Ok(Some(Command::BraceGroup(BraceGroup {
                body,
                lbrace_pos: Position::default(),
                rbrace_pos: Position::default(),
            })));
        }

        Ok(None)
    }
}
