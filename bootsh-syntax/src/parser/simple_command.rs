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

//! Syntax parser for simple commands.

use super::core::{Parser, Result};
use super::lex::{Keyword, Symbol, is_blank, is_word_delimiter};
use crate::source::Range;
use crate::syntax::{Assignment, SimpleCommand, Word, WordString};

impl Parser<'_> {
    /// Parses an assignment word, `name=value`.
    ///
    /// The value word must follow the `=` immediately; `X= foo` assigns the
    /// empty string and runs `foo`.
    pub(crate) fn assignment_word(&mut self) -> Result<Option<Assignment>> {
        if self.lexer.next_symbol()? != Symbol::Token {
            return Ok(None);
        }
        let name_len = self.lexer.peek_name_len()?;
        if name_len == 0 || self.lexer.peek_at_char(name_len)? != Some('=') {
            return Ok(None);
        }

        let (name, name_range) = self.lexer.read_token(name_len)?;
        let equal_pos = self.lexer.position();
        self.lexer.read_char()?;

        let value = match self.lexer.peek_char()? {
            Some(c) if !is_blank(c) && !is_word_delimiter(c) => self.word()?,
            _ => None,
        };
        let value = value.unwrap_or_else(|| {
            Word::String(WordString {
                str: String::new(),
                single_quoted: false,
                range: Range::default(),
            })
        });

        Ok(Some(Assignment {
            name,
            value,
            name_range,
            equal_pos,
        }))
    }

    /// Parses the command name word.
    ///
    /// Alias substitution is applied first. A word that looks like a
    /// reserved word is not a command name; the production returns
    /// `Ok(None)` without consuming it.
    fn cmd_name(&mut self) -> Result<Option<Word>> {
        self.apply_aliases()?;

        let len = self.lexer.peek_word_len()?;
        if len > 0 && self.lexer.peek_string(len)?.parse::<Keyword>().is_ok() {
            return Ok(None);
        }
        self.word()
    }

    /// Parses a simple command.
    ///
    /// The prefix greedily consumes redirections and assignments, then an
    /// optional command name, then a suffix of redirections and arguments.
    /// A command with an empty prefix and no name is not a command, and the
    /// production returns `Ok(None)`.
    pub(crate) fn simple_command(&mut self) -> Result<Option<SimpleCommand>> {
        let mut command = SimpleCommand::default();

        let mut has_prefix = false;
        loop {
            if let Some(redir) = self.io_redirect()? {
                command.io_redirects.push(redir);
                has_prefix = true;
                continue;
            }
            if let Some(assignment) = self.assignment_word()? {
                command.assignments.push(assignment);
                has_prefix = true;
                continue;
            }
            break;
        }

        command.name = self.cmd_name()?;
        if command.name.is_none() {
            if !has_prefix {
                return Ok(None);
            }
        } else {
            loop {
                if let Some(redir) = self.io_redirect()? {
                    command.io_redirects.push(redir);
                    continue;
                }
                if let Some(argument) = self.word()? {
                    command.arguments.push(argument);
                    continue;
                }
                break;
            }
        }

        Ok(Some(command))
    }
}
