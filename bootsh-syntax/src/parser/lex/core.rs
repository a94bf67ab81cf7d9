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

//! Fundamental building blocks of the lexical analyzer.

use super::op::{self, Operator};
use crate::alias::AliasFrame;
use crate::input::{Input, Memory};
use crate::parser::error::Error;
use crate::source::Position;
use std::rc::Rc;

/// Returns true if the character is a blank character.
#[must_use]
pub fn is_blank(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Returns true if the character delimits an unquoted word.
#[must_use]
pub fn is_word_delimiter(c: char) -> bool {
    matches!(c, '&' | '|' | ';' | '<' | '>' | '(' | ')' | '\n') || is_blank(c)
}

/// Classification of the next lexical unit.
///
/// [`Lexer::next_symbol`] computes the classification without consuming the
/// characters that make up the unit; the grammar production that accepts the
/// unit reads them and then calls [`Lexer::consume_symbol`]. A production
/// whose expected symbol does not come next simply leaves the lexer alone
/// and lets the caller try the next grammar alternative.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Symbol {
    /// End of input
    EndOfInput,
    /// Newline character
    Newline,
    /// Multi-character operator
    Op(Operator),
    /// Anything else: a word, keyword or single-character punctuation
    Token,
}

/// Character with source information.
#[derive(Clone, Debug)]
pub(crate) struct SourceChar {
    pub value: char,
    pub pos: Position,
    /// Alias substitution that produced this character, if any.
    pub alias: Option<Rc<AliasFrame>>,
}

/// State of the input function in a lexer.
enum InputState {
    Alive,
    EndOfInput,
    Broken(Error),
}

/// Advances a position over the given character.
fn advance(pos: &mut Position, c: char) {
    pos.offset += c.len_utf8();
    if c == '\n' {
        pos.line += 1;
        pos.column = 1;
    } else {
        pos.column += 1;
    }
}

/// Lexical analyzer.
///
/// A lexer reads lines using an input function and buffers the characters
/// that have been read together with their source positions. The cursor
/// marks the character to be parsed next; peeking never moves it, reading
/// commits it forward. See [`Symbol`] for the symbol recognition protocol
/// layered on top of the character primitives.
pub struct Lexer<'a> {
    input: Box<dyn Input + 'a>,
    state: InputState,
    source: Vec<SourceChar>,
    index: usize,
    /// Position for the next character appended from the input.
    next_pos: Position,
    /// Cached classification of the next unit, if computed.
    sym: Option<Symbol>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer that reads using the given input function.
    ///
    /// `start_line_number` is the line number of the first line, counted
    /// from 1. Interactive callers that parse one line at a time pass the
    /// number of lines already consumed plus one.
    #[must_use]
    pub fn new(input: Box<dyn Input + 'a>, start_line_number: u32) -> Lexer<'a> {
        Lexer {
            input,
            state: InputState::Alive,
            source: Vec::new(),
            index: 0,
            next_pos: Position {
                offset: 0,
                line: start_line_number.max(1),
                column: 1,
            },
            sym: None,
        }
    }

    /// Creates a new lexer with a fixed source code.
    #[must_use]
    pub fn from_memory(code: &'a str) -> Lexer<'a> {
        Lexer::new(Box::new(Memory::new(code)), 1)
    }

    /// Ensures that the character at `self.index + offset` is buffered,
    /// reading more input lines as necessary.
    fn fill(&mut self, offset: usize) -> Result<(), Error> {
        while self.source.len() <= self.index + offset {
            match &self.state {
                InputState::Alive => (),
                InputState::EndOfInput => return Ok(()),
                InputState::Broken(e) => return Err(e.clone()),
            }

            match self.input.next_line() {
                Ok(line) if line.is_empty() => self.state = InputState::EndOfInput,
                Ok(line) => {
                    self.source.reserve(line.chars().count());
                    for c in line.chars() {
                        self.source.push(SourceChar {
                            value: c,
                            pos: self.next_pos,
                            alias: None,
                        });
                        advance(&mut self.next_pos, c);
                    }
                }
                Err(io_error) => {
                    let error = Error {
                        cause: io_error.into(),
                        position: self.next_pos,
                    };
                    self.state = InputState::Broken(error.clone());
                    return Err(error);
                }
            }
        }
        Ok(())
    }

    /// Returns the character `offset` positions past the cursor, if any.
    pub(crate) fn peek_at(&mut self, offset: usize) -> Result<Option<&SourceChar>, Error> {
        self.fill(offset)?;
        Ok(self.source.get(self.index + offset))
    }

    /// Returns the character value `offset` positions past the cursor.
    pub(crate) fn peek_at_char(&mut self, offset: usize) -> Result<Option<char>, Error> {
        Ok(self.peek_at(offset)?.map(|sc| sc.value))
    }

    /// Returns the next character without consuming it.
    pub(crate) fn peek_char(&mut self) -> Result<Option<char>, Error> {
        self.peek_at_char(0)
    }

    /// Consumes and returns the next character.
    pub(crate) fn read_char(&mut self) -> Result<Option<char>, Error> {
        let c = self.peek_char()?;
        if c.is_some() {
            self.index += 1;
        }
        Ok(c)
    }

    /// Returns the position of the next unconsumed character.
    ///
    /// At the end of input this is the position just past the last
    /// character. This function never reads from the input.
    #[must_use]
    pub fn position(&self) -> Position {
        match self.source.get(self.index) {
            Some(sc) => sc.pos,
            None => self.next_pos,
        }
    }

    /// Builds a committed syntax error at the current position.
    #[must_use]
    pub(crate) fn syntax_error(&self, cause: crate::parser::error::SyntaxError) -> Error {
        Error::syntax(cause, self.position())
    }

    /// Classifies the next lexical unit without consuming it.
    ///
    /// Blanks, comments and line continuations before the unit are skipped
    /// (and consumed). The classification is cached until
    /// [`consume_symbol`](Self::consume_symbol) is called.
    pub fn next_symbol(&mut self) -> Result<Symbol, Error> {
        if let Some(sym) = self.sym {
            return Ok(sym);
        }

        let sym = loop {
            let Some(c) = self.peek_char()? else {
                break Symbol::EndOfInput;
            };
            if is_blank(c) {
                self.index += 1;
                continue;
            }
            if c == '\\' && self.peek_at_char(1)? == Some('\n') {
                self.index += 2;
                continue;
            }
            if c == '#' {
                while !matches!(self.peek_char()?, None | Some('\n')) {
                    self.index += 1;
                }
                continue;
            }
            if c == '\n' {
                break Symbol::Newline;
            }
            let c1 = self.peek_at_char(1)?;
            let c2 = self.peek_at_char(2)?;
            break match op::recognize(c, c1, c2) {
                Some(op) => Symbol::Op(op),
                None => Symbol::Token,
            };
        };

        self.sym = Some(sym);
        Ok(sym)
    }

    /// Commits the consumption of the current symbol.
    ///
    /// Grammar productions call this after reading the characters of a unit
    /// whose classification they accepted, so that the next
    /// [`next_symbol`](Self::next_symbol) call inspects fresh input.
    pub fn consume_symbol(&mut self) {
        self.sym = None;
    }

    /// Splices alias replacement text into the buffer in place of the next
    /// `len` characters.
    ///
    /// The replacement characters carry positions starting at the replaced
    /// word's position and an [`AliasFrame`] chaining to the provenance of
    /// the replaced word, which both keeps diagnostics anchored at the
    /// invocation site and lets [`is_active_alias`](Self::is_active_alias)
    /// detect substitution cycles.
    pub(crate) fn substitute_alias(&mut self, len: usize, name: &str, replacement: &str) {
        assert!(
            self.index + len <= self.source.len(),
            "alias name must be buffered before substitution"
        );

        let origin = self.source[self.index].pos;
        let parent = self.source[self.index].alias.clone();
        let frame = Rc::new(AliasFrame {
            name: name.to_string(),
            parent,
        });

        let mut pos = origin;
        let replacement_chars: Vec<SourceChar> = replacement
            .chars()
            .map(|c| {
                let sc = SourceChar {
                    value: c,
                    pos,
                    alias: Some(Rc::clone(&frame)),
                };
                advance(&mut pos, c);
                sc
            })
            .collect();

        self.source
            .splice(self.index..self.index + len, replacement_chars);
        self.sym = None;
    }

    /// Tests if the next character came from substituting the given alias.
    pub(crate) fn is_active_alias(&mut self, name: &str) -> Result<bool, Error> {
        Ok(self
            .peek_at(0)?
            .and_then(|sc| sc.alias.as_ref())
            .is_some_and(|frame| frame.is_alias_for(name)))
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("index", &self.index)
            .field("buffered", &self.source.len())
            .field("sym", &self.sym)
            .finish_non_exhaustive()
    }
}
