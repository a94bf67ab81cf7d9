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

//! Dispatch over the compound command forms.

use super::core::{Parser, Result};
use super::error::SyntaxError;
use crate::syntax::Command;

/// Reserved words the standard leaves unspecified; using one as a command
/// is rejected instead of misparsed.
const UNSPECIFIED_RESERVED_WORDS: &[&str] = &["[[", "]]", "function", "select"];

impl Parser<'_> {
    /// Parses a compound command.
    ///
    /// The alternatives are tried in a fixed order; the first one that
    /// recognizes its opening token wins and every later failure inside it
    /// is committed.
    pub(crate) fn compound_command(&mut self) -> Result<Option<Command>> {
        if let Some(group) = self.brace_group()? {
            return Ok(Some(Command::BraceGroup(group)));
        }
        if let Some(subshell) = self.subshell()? {
            return Ok(Some(Command::Subshell(subshell)));
        }
        if let Some(if_clause) = self.if_clause()? {
            return Ok(Some(Command::If(if_clause)));
        }
        if let Some(for_clause) = self.for_clause()? {
            return Ok(Some(Command::For(for_clause)));
        }
        if let Some(loop_clause) = self.loop_clause()? {
            return Ok(Some(Command::Loop(loop_clause)));
        }
        if let Some(case_clause) = self.case_clause()? {
            return Ok(Some(Command::Case(case_clause)));
        }

        self.unspecified_word()?;

        if let Some(function) = self.function_definition()? {
            return Ok(Some(Command::FunctionDefinition(function)));
        }
        Ok(None)
    }

    /// Rejects constructs whose results the standard leaves unspecified:
    /// the reserved words `[[`, `]]`, `function` and `select`, and words of
    /// the form `name:`.
    fn unspecified_word(&mut self) -> Result<()> {
        let len = self.lexer.peek_word_len()?;
        if len == 0 {
            return Ok(());
        }

        let word = self.lexer.peek_string(len)?;
        if UNSPECIFIED_RESERVED_WORDS.contains(&word.as_str()) {
            return Err(self.error_here(SyntaxError::ReservedWord(word)));
        }

        let name_len = self.lexer.peek_name_len()?;
        if name_len > 0 && self.lexer.peek_at_char(name_len)? == Some(':') {
            return Err(self.error_here(SyntaxError::NameColon));
        }

        Ok(())
    }
}
