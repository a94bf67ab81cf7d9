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

//! Syntax parser for redirections.

use super::core::{Parser, PendingHereDoc, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Operator, Symbol};
use crate::source::{Position, Range};
use crate::syntax::{HereDocBody, IoRedirect, IoRedirectOp};
use std::rc::Rc;

impl Parser<'_> {
    /// Parses the file descriptor number preceding a redirection operator.
    ///
    /// An IO number is a single digit immediately followed by `<` or `>`;
    /// anything else is an ordinary word.
    fn io_number(&mut self) -> Result<Option<(i32, Position)>> {
        if self.lexer.next_symbol()? != Symbol::Token {
            return Ok(None);
        }
        let Some(c) = self.lexer.peek_char()? else {
            return Ok(None);
        };
        if !c.is_ascii_digit() || !matches!(self.lexer.peek_at_char(1)?, Some('<' | '>')) {
            return Ok(None);
        }

        let position = self.lexer.position();
        self.lexer.read_char()?;
        self.lexer.consume_symbol();
        Ok(Some((c.to_digit(10).unwrap() as i32, position)))
    }

    /// Recognizes a file redirection operator.
    fn io_file_op(&mut self) -> Result<Option<(IoRedirectOp, Range)>> {
        if let Some(range) = self.lexer.eat_token("<")? {
            return Ok(Some((IoRedirectOp::Less, range)));
        }
        if let Some(range) = self.lexer.eat_token(">")? {
            return Ok(Some((IoRedirectOp::Great, range)));
        }
        let operators = [
            (Operator::LessAnd, IoRedirectOp::LessAnd),
            (Operator::GreatAnd, IoRedirectOp::GreatAnd),
            (Operator::DGreat, IoRedirectOp::DGreat),
            (Operator::Clobber, IoRedirectOp::Clobber),
            (Operator::LessGreat, IoRedirectOp::LessGreat),
        ];
        for (lex_op, op) in operators {
            if let Some(range) = self.lexer.eat_operator(lex_op)? {
                return Ok(Some((op, range)));
            }
        }
        Ok(None)
    }

    /// Recognizes a here-document operator.
    fn io_here_op(&mut self) -> Result<Option<(IoRedirectOp, Range)>> {
        if let Some(range) = self.lexer.eat_operator(Operator::DLess)? {
            return Ok(Some((IoRedirectOp::DLess, range)));
        }
        if let Some(range) = self.lexer.eat_operator(Operator::DLessDash)? {
            return Ok(Some((IoRedirectOp::DLessDash, range)));
        }
        Ok(None)
    }

    /// Parses one redirection.
    ///
    /// A here-document redirect is queued on the parser; its body is read
    /// once the enclosing command line reaches a newline.
    pub(crate) fn io_redirect(&mut self) -> Result<Option<IoRedirect>> {
        let io_number = self.io_number()?;
        let (io_number, io_number_pos) = match io_number {
            Some((n, pos)) => (Some(n), pos),
            None => (None, Position::default()),
        };

        if let Some((op, op_range)) = self.io_file_op()? {
            let Some(name) = self.word()? else {
                return Err(self.error_here(SyntaxError::ExpectedFilename));
            };
            return Ok(Some(IoRedirect {
                io_number,
                io_number_pos,
                op,
                op_range,
                name,
                here_document: None,
            }));
        }

        if let Some((op, op_range)) = self.io_here_op()? {
            let Some(name) = self.word()? else {
                return Err(self.error_here(SyntaxError::ExpectedHereDocDelimiter));
            };
            let Some(delimiter) = name.literal_str() else {
                return Err(Error::syntax(
                    SyntaxError::NonLiteralHereDocDelimiter,
                    name.range().begin,
                ));
            };

            let body = Rc::new(HereDocBody::default());
            self.push_pending_here_doc(PendingHereDoc {
                delimiter,
                quoted: name.is_quoted(),
                remove_tabs: op == IoRedirectOp::DLessDash,
                body: Rc::clone(&body),
                op_position: op_range.begin,
            });
            return Ok(Some(IoRedirect {
                io_number,
                io_number_pos,
                op,
                op_range,
                name,
                here_document: Some(body),
            }));
        }

        if io_number.is_some() {
            return Err(self.error_here(SyntaxError::ExpectedRedirect));
        }
        Ok(None)
    }
}
