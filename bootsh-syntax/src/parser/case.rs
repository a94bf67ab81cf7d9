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

//! Syntax parser for the `case` conditional construct.

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Operator;
use crate::source::Position;
use crate::syntax::{CaseClause, CaseItem};

impl Parser<'_> {
    /// Parses a `case` clause.
    pub(crate) fn case_clause(&mut self) -> Result<Option<CaseClause>> {
        let Some(case_range) = self.lexer.eat_token("case")? else {
            return Ok(None);
        };

        let Some(word) = self.word()? else {
            return Err(self.error_here(SyntaxError::ExpectedWord));
        };

        self.linebreak()?;
        let in_range = self.lexer.expect_token("in")?;
        self.linebreak()?;

        let mut items = Vec::new();
        let esac_range;
        loop {
            if let Some(range) = self.lexer.eat_token("esac")? {
                esac_range = range;
                break;
            }

            let (item, dsemi) = self.expect_case_item()?;
            items.push(item);

            if !dsemi {
                // Only the last item may omit `;;`.
                esac_range = self.lexer.expect_token("esac")?;
                break;
            }
        }

        Ok(Some(CaseClause {
            word,
            items,
            case_range,
            in_range,
            esac_range,
        }))
    }

    /// Parses one case item. Returns the item and whether it was terminated
    /// by `;;`.
    fn expect_case_item(&mut self) -> Result<(CaseItem, bool)> {
        let lparen = self.lexer.eat_token("(")?;

        let Some(first) = self.word()? else {
            return Err(self.error_here(SyntaxError::ExpectedWord));
        };
        let mut patterns = vec![first];
        while self.lexer.eat_token("|")?.is_some() {
            let Some(pattern) = self.word()? else {
                return Err(self.error_here(SyntaxError::ExpectedWord));
            };
            patterns.push(pattern);
        }

        let rparen = self.lexer.expect_token(")")?;

        // The body may be empty.
        let body = self.compound_list()?.unwrap_or_default();

        let dsemi_range = self.lexer.eat_operator(Operator::DSemi)?;
        let dsemi = dsemi_range.is_some();
        if dsemi {
            self.linebreak()?;
        }

        let item = CaseItem {
            patterns,
            body,
            lparen_pos: lparen.map_or_else(Position::default, |r| r.begin),
            rparen_pos: rparen.begin,
            dsemi_range: dsemi_range.unwrap_or_default(),
        };
        Ok((item, dsemi))
    }
}
