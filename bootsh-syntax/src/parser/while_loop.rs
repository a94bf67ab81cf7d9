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

//! Syntax parser for `while` and `until` loops.

use super::core::{Parser, Result};
use crate::source::Range;
use crate::syntax::{CommandList, LoopClause, LoopType};

impl Parser<'_> {
    /// Parses a `do ... done` group; both keywords are required.
    ///
    /// Returns the body and the ranges of `do` and `done`.
    pub(crate) fn expect_do_group(&mut self) -> Result<(Vec<CommandList>, Range, Range)> {
        let do_range = self.lexer.expect_token("do")?;
        let body = self.expect_compound_list()?;
        let done_range = self.lexer.expect_token("done")?;
        Ok((body, do_range, done_range))
    }

    /// Parses a `while` or `until` loop.
    pub(crate) fn loop_clause(&mut self) -> Result<Option<LoopClause>> {
        let (r#type, while_until_range) = if let Some(range) = self.lexer.eat_token("while")? {
            (LoopType::While, range)
        } else if let Some(range) = self.lexer.eat_token("until")? {
            (LoopType::Until, range)
        } else {
            return Ok(None);
        };

        let condition = self.expect_compound_list()?;
        let (body, do_range, done_range) = self.expect_do_group()?;

        Ok(Some(LoopClause {
            r#type,
            condition,
            body,
            while_until_range,
            do_range,
            done_range,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::{ErrorCause, SyntaxError};

    fn parse_loop(text: &str) -> LoopClause {
        let mut parser = Parser::from_memory(text);
        parser.loop_clause().unwrap().unwrap()
    }

    #[test]
    fn while_loop() {
        let clause = parse_loop("while key_pressed; do draw_menu; done");
        assert_eq!(clause.r#type, LoopType::While);
        assert_eq!(clause.condition.len(), 1);
        assert_eq!(clause.body.len(), 1);
        assert_eq!(clause.while_until_range.begin.column, 1);
        assert_eq!(clause.do_range.begin.column, 20);
        assert_eq!(clause.done_range.begin.column, 33);
    }

    #[test]
    fn until_loop() {
        let clause = parse_loop("until timeout; do countdown; done");
        assert_eq!(clause.r#type, LoopType::Until);
    }

    #[test]
    fn multi_command_condition() {
        let clause = parse_loop("while a; b; do c; done");
        assert_eq!(clause.condition.len(), 2);
    }

    #[test]
    fn missing_do_is_committed() {
        let mut parser = Parser::from_memory("while true; done");
        let error = parser.loop_clause().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedToken("do"))
        );
    }

    #[test]
    fn missing_done_is_committed() {
        let mut parser = Parser::from_memory("while true; do x;");
        let error = parser.loop_clause().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedToken("done"))
        );
    }

    #[test]
    fn not_a_loop() {
        let mut parser = Parser::from_memory("whilex");
        assert_eq!(parser.loop_clause().unwrap(), None);
    }
}
