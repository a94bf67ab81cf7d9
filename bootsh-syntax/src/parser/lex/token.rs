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

//! Part of the lexer that matches tokens by string.

use super::core::{Lexer, Symbol, is_word_delimiter};
use super::op::Operator;
use crate::parser::error::{Error, SyntaxError};
use crate::source::Range;

impl Lexer<'_> {
    /// Returns the length of the plain word at the cursor.
    ///
    /// A plain word extends until a word delimiter, a quoting character or
    /// an expansion character. The length is 0 when the next symbol is not a
    /// token. This is what keyword, alias and name recognition peek at; the
    /// characters are not consumed.
    pub(crate) fn peek_word_len(&mut self) -> Result<usize, Error> {
        if self.next_symbol()? != Symbol::Token {
            return Ok(0);
        }
        let mut len = 0;
        while let Some(c) = self.peek_at_char(len)? {
            if is_word_delimiter(c) || matches!(c, '\'' | '"' | '`' | '$' | '\\') {
                break;
            }
            len += 1;
        }
        Ok(len)
    }

    /// Returns the length of the name at the cursor, or 0 if the cursor is
    /// not at a name.
    ///
    /// A name is a letter or underscore followed by letters, digits and
    /// underscores.
    pub(crate) fn peek_name_len(&mut self) -> Result<usize, Error> {
        if self.next_symbol()? != Symbol::Token {
            return Ok(0);
        }
        match self.peek_char()? {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
            _ => return Ok(0),
        }
        let mut len = 1;
        while let Some(c) = self.peek_at_char(len)? {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            len += 1;
        }
        Ok(len)
    }

    /// Returns the length of the word at the cursor if it is a valid alias
    /// name, or 0.
    pub(crate) fn peek_alias_len(&mut self) -> Result<usize, Error> {
        let len = self.peek_word_len()?;
        for i in 0..len {
            let c = self.peek_at_char(i)?.unwrap();
            match c {
                '_' | '!' | '%' | ',' | '@' => (),
                c if c.is_ascii_alphanumeric() => (),
                _ => return Ok(0),
            }
        }
        Ok(len)
    }

    /// Collects the next `len` characters into a string without consuming
    /// them.
    pub(crate) fn peek_string(&mut self, len: usize) -> Result<String, Error> {
        let mut s = String::with_capacity(len);
        for i in 0..len {
            match self.peek_at_char(i)? {
                Some(c) => s.push(c),
                None => break,
            }
        }
        Ok(s)
    }

    /// Consumes the next `len` characters as one token.
    ///
    /// Returns the token text and its source range, and commits the symbol.
    pub(crate) fn read_token(&mut self, len: usize) -> Result<(String, Range), Error> {
        let begin = self.position();
        let mut s = String::with_capacity(len);
        let mut end = begin;
        for _ in 0..len {
            let Some(sc) = self.peek_at(0)? else { break };
            end = sc.pos.next();
            s.push(sc.value);
            self.read_char()?;
        }
        self.consume_symbol();
        Ok((s, Range { begin, end }))
    }

    /// Consumes the given token if it comes next.
    ///
    /// A single-character non-alphabetic token (`{`, `(`, `;`, `!`, ...)
    /// matches its character alone; an alphabetic token matches only a whole
    /// plain word, so `fi` does not match the prefix of `file`. Returns the
    /// source range of the consumed token, or `None` without consuming
    /// anything.
    pub(crate) fn eat_token(&mut self, token: &'static str) -> Result<Option<Range>, Error> {
        if self.next_symbol()? != Symbol::Token {
            return Ok(None);
        }

        let mut chars = token.chars();
        let first = chars.next().expect("token must not be empty");
        if chars.as_str().is_empty() && !first.is_ascii_alphabetic() {
            if self.peek_char()? != Some(first) {
                return Ok(None);
            }
            return Ok(Some(self.read_token(1)?.1));
        }

        let len = self.peek_word_len()?;
        if len != token.chars().count() || self.peek_string(len)? != token {
            return Ok(None);
        }
        Ok(Some(self.read_token(len)?.1))
    }

    /// Consumes the given token, or reports `expected '<token>'`.
    pub(crate) fn expect_token(&mut self, token: &'static str) -> Result<Range, Error> {
        match self.eat_token(token)? {
            Some(range) => Ok(range),
            None => Err(self.syntax_error(SyntaxError::ExpectedToken(token))),
        }
    }

    /// Consumes the given operator if it comes next.
    pub(crate) fn eat_operator(&mut self, op: Operator) -> Result<Option<Range>, Error> {
        if self.next_symbol()? != Symbol::Op(op) {
            return Ok(None);
        }
        let len = op.as_str().chars().count();
        Ok(Some(self.read_token(len)?.1))
    }
}
