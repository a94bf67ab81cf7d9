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

//! Fundamentals for implementing the parser.
//!
//! [`Parser`] holds the parse state: the [lexer](Lexer), the optional alias
//! resolver, and the queue of here-documents whose bodies have not been
//! read yet. Grammar productions are methods on `Parser`, one file per
//! production family, all following the same three-state contract:
//!
//! - `Ok(Some(node))` — the production matched and consumed its input;
//! - `Ok(None)` — the production does not apply here and consumed nothing,
//!   so the caller is free to try the next grammar alternative;
//! - `Err(error)` — the production began matching but cannot complete; the
//!   error is committed and must propagate to the caller of the parse.

use super::error::{Error, SyntaxError};
use super::lex::{Lexer, Symbol};
use crate::alias::AliasResolver;
use crate::source::Position;
use crate::syntax::{HereDocBody, Program, Word, WordString};
use std::rc::Rc;

/// Entire result of parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Here-document whose operator has been parsed but whose body has not been
/// read yet.
pub(crate) struct PendingHereDoc {
    /// Delimiter string, quotes removed.
    pub delimiter: String,
    /// Whether any part of the delimiter word was quoted.
    pub quoted: bool,
    /// Whether leading tabs are removed from the body lines (`<<-`).
    pub remove_tabs: bool,
    /// Body cell shared with the redirect node, filled when the body is
    /// read.
    pub body: Rc<HereDocBody>,
    /// Position of the redirection operator, for diagnostics.
    pub op_position: Position,
}

/// The shell syntax parser.
///
/// A parser wraps a [`Lexer`] and exposes the grammar productions. The
/// instance is exclusively owned by its caller for its whole lifetime; a
/// parse either runs to completion or stops at the first committed error.
///
/// ```
/// # use bootsh_syntax::parser::Parser;
/// let mut parser = Parser::from_memory("boot local || boot net &");
/// let program = parser.parse_program().unwrap();
/// assert_eq!(program.body.len(), 1);
/// assert!(program.body[0].ampersand);
/// ```
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    aliases: Option<&'a dyn AliasResolver>,
    pending_here_docs: Vec<PendingHereDoc>,
}

impl<'a> Parser<'a> {
    /// Creates a parser that performs no alias substitution.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Parser<'a> {
        Parser {
            lexer,
            aliases: None,
            pending_here_docs: Vec::new(),
        }
    }

    /// Creates a parser that substitutes aliases from the given resolver.
    #[must_use]
    pub fn with_aliases(lexer: Lexer<'a>, aliases: &'a dyn AliasResolver) -> Parser<'a> {
        Parser {
            lexer,
            aliases: Some(aliases),
            pending_here_docs: Vec::new(),
        }
    }

    /// Creates a parser with a fixed source code.
    #[must_use]
    pub fn from_memory(code: &'a str) -> Parser<'a> {
        Parser::new(Lexer::from_memory(code))
    }

    /// Builds a committed syntax error at the current position.
    pub(crate) fn error_here(&self, cause: SyntaxError) -> Error {
        self.lexer.syntax_error(cause)
    }

    /// Tests if the input is exhausted.
    pub(crate) fn eof(&mut self) -> Result<bool> {
        Ok(self.lexer.next_symbol()? == Symbol::EndOfInput)
    }

    /// Consumes one newline, if one comes next.
    ///
    /// Consuming a newline is what triggers reading the bodies of queued
    /// here-documents: their content starts on the line following the
    /// redirect operator's line.
    pub(crate) fn newline(&mut self) -> Result<bool> {
        if self.lexer.next_symbol()? != Symbol::Newline {
            return Ok(false);
        }
        self.lexer.read_char()?;
        self.lexer.consume_symbol();
        if !self.pending_here_docs.is_empty() {
            self.read_pending_here_docs()?;
        }
        Ok(true)
    }

    /// Consumes one or more newlines; returns whether any was consumed.
    pub(crate) fn newline_list(&mut self) -> Result<bool> {
        let mut any = false;
        while self.newline()? {
            any = true;
        }
        Ok(any)
    }

    /// Consumes any number of newlines.
    pub(crate) fn linebreak(&mut self) -> Result<()> {
        self.newline_list()?;
        Ok(())
    }

    /// Queues a here-document for body reading at the next newline.
    pub(crate) fn push_pending_here_doc(&mut self, pending: PendingHereDoc) {
        self.pending_here_docs.push(pending);
    }

    /// Tests if any here-document is waiting for its body.
    pub(crate) fn has_pending_here_docs(&self) -> bool {
        !self.pending_here_docs.is_empty()
    }

    /// Reads the bodies of all queued here-documents, in queue order.
    fn read_pending_here_docs(&mut self) -> Result<()> {
        for pending in std::mem::take(&mut self.pending_here_docs) {
            let raw = self.lexer.here_doc_lines(
                &pending.delimiter,
                pending.remove_tabs,
                pending.op_position,
            )?;

            let mut lines = Vec::with_capacity(raw.len());
            for line in raw {
                lines.push(if pending.quoted {
                    Word::String(WordString {
                        str: line,
                        single_quoted: true,
                        range: Default::default(),
                    })
                } else {
                    Self::expanded_text(&line)?
                });
            }

            pending
                .body
                .lines
                .set(lines)
                .expect("here-document body must be filled only once");
        }
        Ok(())
    }

    /// Performs alias substitution on the word at the cursor, repeatedly,
    /// until the word is not an alias invocation.
    ///
    /// A name that is already being substituted somewhere up the provenance
    /// chain of the current input is left alone, which bounds mutually
    /// recursive alias definitions.
    pub(crate) fn apply_aliases(&mut self) -> Result<()> {
        let Some(aliases) = self.aliases else {
            return Ok(());
        };

        loop {
            if self.lexer.next_symbol()? != Symbol::Token {
                return Ok(());
            }
            let len = self.lexer.peek_alias_len()?;
            if len == 0 {
                return Ok(());
            }
            let name = self.lexer.peek_string(len)?;
            if self.lexer.is_active_alias(&name)? {
                return Ok(());
            }
            let Some(replacement) = aliases.lookup(&name) else {
                return Ok(());
            };
            let replacement = replacement.to_string();
            self.lexer.substitute_alias(len, &name, &replacement);
        }
    }

    /// Parses a whole program, consuming the input to its end.
    ///
    /// Anything left over after the last parsable command list is a
    /// committed error.
    pub fn parse_program(&mut self) -> Result<Program> {
        let program = self.program()?;
        if !self.eof()? {
            return Err(self.error_here(SyntaxError::ExpectedCompleteCommand));
        }
        Ok(program)
    }

    /// Parses one line of input.
    ///
    /// Returns `Ok(None)` at the end of input, and `Ok(Some(program))` for a
    /// parsed line (possibly empty). On a committed error, the remainder of
    /// the line is consumed so that an interactive caller can report the
    /// error and retry from the next line.
    pub fn parse_line(&mut self) -> Result<Option<Program>> {
        match self.parse_line_impl() {
            Ok(result) => Ok(result),
            Err(error) => {
                self.recover_line();
                Err(error)
            }
        }
    }

    fn parse_line_impl(&mut self) -> Result<Option<Program>> {
        if self.eof()? {
            return Ok(None);
        }

        let mut program = Program::default();
        if self.newline()? {
            return Ok(Some(program));
        }

        match self.complete_command()? {
            Some(body) => program.body = body,
            None => return Err(self.error_here(SyntaxError::ExpectedCompleteCommand)),
        }

        if !self.eof()? && !self.newline()? {
            return Err(self.error_here(SyntaxError::ExpectedNewline));
        }
        Ok(Some(program))
    }

    /// Consumes input up to and including the next newline, dropping any
    /// queued here-documents, so that parsing can resume on the next line.
    fn recover_line(&mut self) {
        loop {
            match self.lexer.read_char() {
                Ok(Some('\n')) | Ok(None) | Err(_) => break,
                Ok(Some(_)) => (),
            }
        }
        self.lexer.consume_symbol();
        self.pending_here_docs.clear();
    }
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("lexer", &self.lexer)
            .field("pending_here_docs", &self.pending_here_docs.len())
            .finish_non_exhaustive()
    }
}
