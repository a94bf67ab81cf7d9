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

//! Syntax parser for words.
//!
//! A word is parsed character by character, switching on the quoting state
//! and on the `$` and backquote expansion introducers. Command substitution
//! recursively parses a full embedded program, which makes this module and
//! the grammar engine mutually recursive.
//!
//! A word that produced exactly one fragment is returned bare; otherwise the
//! fragments are wrapped in a [`WordList`]. This keeps the common case — a
//! plain literal word — a single [`WordString`] node.

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::{Symbol, is_word_delimiter};
use crate::source::{Position, Range};
use crate::syntax::{
    ParamOp, Word, WordArithmetic, WordCommand, WordList, WordParameter, WordString,
};

/// Accumulates the fragments of one word.
///
/// Consecutive unquoted literal characters merge into a single
/// [`WordString`] fragment; quoted fragments and expansions are pushed as
/// separate children.
struct WordBuilder {
    children: Vec<Word>,
    buf: String,
    buf_range: Range,
}

impl WordBuilder {
    fn new() -> Self {
        WordBuilder {
            children: Vec::new(),
            buf: String::new(),
            buf_range: Range::default(),
        }
    }

    fn push_char(&mut self, c: char, pos: Position) {
        if self.buf.is_empty() {
            self.buf_range.begin = pos;
        }
        self.buf_range.end = pos.next();
        self.buf.push(c);
    }

    fn flush(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        self.children.push(Word::String(WordString {
            str: std::mem::take(&mut self.buf),
            single_quoted: false,
            range: self.buf_range,
        }));
        self.buf_range = Range::default();
    }

    fn push_word(&mut self, word: Word) {
        self.flush();
        self.children.push(word);
    }

    fn into_children(mut self) -> Vec<Word> {
        self.flush();
        self.children
    }

    /// Returns the accumulated word, unwrapping a lone fragment.
    fn into_word(self) -> Option<Word> {
        let mut children = self.into_children();
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Word::List(WordList {
                children,
                double_quoted: false,
            })),
        }
    }
}

impl Parser<'_> {
    /// Parses a word.
    ///
    /// Returns `Ok(None)` without consuming anything if no word starts at
    /// the current position (the next symbol is an operator, a newline or
    /// the end of input, or the first character delimits words).
    pub fn word(&mut self) -> Result<Option<Word>> {
        self.word_impl(None)
    }

    /// Parses a word, stopping at the unquoted character `end` if given.
    ///
    /// With an `end` character the word is an expansion argument: blanks and
    /// operator characters lose their delimiting power and are taken
    /// literally, as in `${name-default value}`.
    pub(crate) fn word_impl(&mut self, end: Option<char>) -> Result<Option<Word>> {
        if self.lexer.next_symbol()? != Symbol::Token {
            return Ok(None);
        }
        // The cursor moves below the symbol granularity from here on.
        self.lexer.consume_symbol();

        let mut builder = WordBuilder::new();
        loop {
            let Some(c) = self.lexer.peek_char()? else {
                break;
            };
            if end == Some(c) || c == '\n' {
                break;
            }
            match c {
                '\'' => builder.push_word(self.single_quotes()?),
                '"' => builder.push_word(self.double_quotes()?),
                '$' => builder.push_word(self.dollar()?),
                '`' => builder.push_word(self.back_quotes()?),
                '\\' => {
                    let begin = self.lexer.position();
                    self.lexer.read_char()?;
                    match self.lexer.peek_char()? {
                        // Line continuation
                        Some('\n') => {
                            self.lexer.read_char()?;
                        }
                        Some(escaped) => {
                            self.lexer.read_char()?;
                            builder.push_word(Word::String(WordString {
                                str: escaped.to_string(),
                                single_quoted: true,
                                range: Range {
                                    begin,
                                    end: begin.next().next(),
                                },
                            }));
                        }
                        None => builder.push_char('\\', begin),
                    }
                }
                c if end.is_none() && is_word_delimiter(c) => break,
                c => {
                    let pos = self.lexer.position();
                    self.lexer.read_char()?;
                    builder.push_char(c, pos);
                }
            }
        }

        Ok(builder.into_word())
    }

    /// Parses a single-quoted string. The cursor must be at the `'`.
    fn single_quotes(&mut self) -> Result<Word> {
        let begin = self.lexer.position();
        self.lexer.read_char()?;

        let mut str = String::new();
        loop {
            match self.lexer.read_char()? {
                None => {
                    return Err(crate::parser::Error::syntax(
                        SyntaxError::UnterminatedSingleQuotes,
                        begin,
                    ));
                }
                Some('\'') => break,
                Some(c) => str.push(c),
            }
        }

        Ok(Word::String(WordString {
            str,
            single_quoted: true,
            range: Range {
                begin,
                end: self.lexer.position(),
            },
        }))
    }

    /// Parses a double-quoted string. The cursor must be at the `"`.
    ///
    /// Within double quotes, parameter, command and arithmetic expansions
    /// are still recognized, and a backslash escapes only `$`, `` ` ``, `"`,
    /// `\` and the newline.
    fn double_quotes(&mut self) -> Result<Word> {
        let begin = self.lexer.position();
        self.lexer.read_char()?;

        let mut builder = WordBuilder::new();
        loop {
            match self.lexer.peek_char()? {
                None => {
                    return Err(crate::parser::Error::syntax(
                        SyntaxError::UnterminatedDoubleQuotes,
                        begin,
                    ));
                }
                Some('"') => {
                    self.lexer.read_char()?;
                    break;
                }
                Some('$') => builder.push_word(self.dollar()?),
                Some('`') => builder.push_word(self.back_quotes()?),
                Some('\\') => {
                    let pos = self.lexer.position();
                    match self.lexer.peek_at_char(1)? {
                        Some('\n') => {
                            self.lexer.read_char()?;
                            self.lexer.read_char()?;
                        }
                        Some(escaped @ ('$' | '`' | '"' | '\\')) => {
                            self.lexer.read_char()?;
                            self.lexer.read_char()?;
                            builder.push_char(escaped, pos);
                        }
                        _ => {
                            self.lexer.read_char()?;
                            builder.push_char('\\', pos);
                        }
                    }
                }
                Some(c) => {
                    let pos = self.lexer.position();
                    self.lexer.read_char()?;
                    builder.push_char(c, pos);
                }
            }
        }

        Ok(Word::List(WordList {
            children: builder.into_children(),
            double_quoted: true,
        }))
    }

    /// Parses an expansion introduced by `$`. The cursor must be at the `$`.
    ///
    /// A `$` followed by nothing expandable is taken literally.
    pub(crate) fn dollar(&mut self) -> Result<Word> {
        let dollar_pos = self.lexer.position();
        self.lexer.read_char()?;

        match self.lexer.peek_char()? {
            Some('{') => self.parameter_expression(dollar_pos),
            Some('(') if self.lexer.peek_at_char(1)? == Some('(') => self.arithmetic(dollar_pos),
            Some('(') => self.command_substitution(dollar_pos),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                let begin = self.lexer.position();
                let mut name = String::new();
                let mut end = begin;
                while let Some(c) = self.lexer.peek_char()? {
                    if !c.is_ascii_alphanumeric() && c != '_' {
                        break;
                    }
                    end = self.lexer.position().next();
                    name.push(c);
                    self.lexer.read_char()?;
                }
                Ok(parameter(name, dollar_pos, Range { begin, end }))
            }
            // An unbraced positional parameter is a single digit: `$10` is
            // `$1` followed by `0`.
            Some(c) if c.is_ascii_digit() => {
                let begin = self.lexer.position();
                self.lexer.read_char()?;
                let range = Range {
                    begin,
                    end: begin.next(),
                };
                Ok(parameter(c.to_string(), dollar_pos, range))
            }
            Some(c) if matches!(c, '@' | '*' | '#' | '?' | '-' | '$' | '!') => {
                let begin = self.lexer.position();
                self.lexer.read_char()?;
                let range = Range {
                    begin,
                    end: begin.next(),
                };
                Ok(parameter(c.to_string(), dollar_pos, range))
            }
            _ => Ok(Word::String(WordString {
                str: "$".to_string(),
                single_quoted: false,
                range: Range {
                    begin: dollar_pos,
                    end: dollar_pos.next(),
                },
            })),
        }
    }

    /// Parses a braced parameter expansion. The cursor must be at the `{`
    /// following the `$`.
    fn parameter_expression(&mut self, dollar_pos: Position) -> Result<Word> {
        let lbrace_pos = self.lexer.position();
        self.lexer.read_char()?;

        let mut op = ParamOp::None;

        // `${#name}` is the length of `name`; a bare `${#}` expands the
        // parameter `#` itself.
        if self.lexer.peek_char()? == Some('#') {
            if let Some(c) = self.lexer.peek_at_char(1)? {
                if c.is_ascii_alphanumeric() || c == '_' {
                    op = ParamOp::LeadingHash;
                    self.lexer.read_char()?;
                }
            }
        }

        let name_begin = self.lexer.position();
        let mut name = String::new();
        match self.lexer.peek_char()? {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                while let Some(c) = self.lexer.peek_char()? {
                    if !c.is_ascii_alphanumeric() && c != '_' {
                        break;
                    }
                    name.push(c);
                    self.lexer.read_char()?;
                }
            }
            // Braced positional parameters may have several digits.
            Some(c) if c.is_ascii_digit() => {
                while let Some(c) = self.lexer.peek_char()? {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    name.push(c);
                    self.lexer.read_char()?;
                }
            }
            Some(c) if matches!(c, '@' | '*' | '#' | '?' | '-' | '$' | '!') => {
                name.push(c);
                self.lexer.read_char()?;
            }
            _ => (),
        }
        if name.is_empty() {
            return Err(self.error_here(SyntaxError::ExpectedParameterName));
        }
        let name_range = Range {
            begin: name_begin,
            end: self.lexer.position(),
        };

        let mut colon = false;
        if op == ParamOp::None {
            match self.lexer.peek_char()? {
                Some(':')
                    if matches!(
                        self.lexer.peek_at_char(1)?,
                        Some('-' | '=' | '?' | '+')
                    ) =>
                {
                    colon = true;
                    self.lexer.read_char()?;
                    op = match self.lexer.read_char()? {
                        Some('-') => ParamOp::Minus,
                        Some('=') => ParamOp::Equal,
                        Some('?') => ParamOp::Qmark,
                        _ => ParamOp::Plus,
                    };
                }
                Some('-') => {
                    self.lexer.read_char()?;
                    op = ParamOp::Minus;
                }
                Some('=') => {
                    self.lexer.read_char()?;
                    op = ParamOp::Equal;
                }
                Some('?') => {
                    self.lexer.read_char()?;
                    op = ParamOp::Qmark;
                }
                Some('+') => {
                    self.lexer.read_char()?;
                    op = ParamOp::Plus;
                }
                Some('%') => {
                    self.lexer.read_char()?;
                    op = if self.lexer.peek_char()? == Some('%') {
                        self.lexer.read_char()?;
                        ParamOp::DPercent
                    } else {
                        ParamOp::Percent
                    };
                }
                Some('#') => {
                    self.lexer.read_char()?;
                    op = if self.lexer.peek_char()? == Some('#') {
                        self.lexer.read_char()?;
                        ParamOp::DHash
                    } else {
                        ParamOp::Hash
                    };
                }
                _ => (),
            }
        }

        let arg = if op != ParamOp::None && op != ParamOp::LeadingHash {
            self.word_impl(Some('}'))?.map(Box::new)
        } else {
            None
        };

        if self.lexer.peek_char()? != Some('}') {
            return Err(self.error_here(SyntaxError::ExpectedToken("}")));
        }
        let rbrace_pos = self.lexer.position();
        self.lexer.read_char()?;

        Ok(Word::Parameter(WordParameter {
            name,
            op,
            colon,
            arg,
            dollar_pos,
            name_range,
            lbrace_pos,
            rbrace_pos,
        }))
    }

    /// Parses a `$(...)` command substitution. The cursor must be at the
    /// `(`.
    ///
    /// The embedded program is parsed by the grammar engine on the same
    /// stream; the engine stops at the `)` because a lone `)` never starts
    /// a command list.
    fn command_substitution(&mut self, dollar_pos: Position) -> Result<Word> {
        self.lexer.read_char()?;
        self.lexer.consume_symbol();

        let program = self.program()?;

        let Some(close) = self.lexer.eat_token(")")? else {
            return Err(self.error_here(SyntaxError::ExpectedToken(")")));
        };

        Ok(Word::Command(WordCommand {
            program: (!program.body.is_empty()).then_some(program),
            back_quoted: false,
            range: Range {
                begin: dollar_pos,
                end: close.end,
            },
        }))
    }

    /// Parses a `$((...))` arithmetic expansion. The cursor must be at the
    /// first `(`.
    ///
    /// The raw text up to the matching `))` is collected with parenthesis
    /// counting and then re-parsed as an expandable word, so nested
    /// expansions inside the expression are recognized while operators and
    /// blanks stay literal.
    fn arithmetic(&mut self, dollar_pos: Position) -> Result<Word> {
        self.lexer.read_char()?;
        self.lexer.read_char()?;
        self.lexer.consume_symbol();

        let mut depth = 0usize;
        let mut text = String::new();
        loop {
            match self.lexer.peek_char()? {
                None => return Err(self.error_here(SyntaxError::ExpectedToken("))"))),
                Some(')') if depth == 0 => {
                    if self.lexer.peek_at_char(1)? != Some(')') {
                        return Err(self.error_here(SyntaxError::ExpectedToken("))")));
                    }
                    self.lexer.read_char()?;
                    self.lexer.read_char()?;
                    break;
                }
                Some(c) => {
                    match c {
                        '(' => depth += 1,
                        ')' => depth -= 1,
                        _ => (),
                    }
                    text.push(c);
                    self.lexer.read_char()?;
                }
            }
        }

        let body = Self::expanded_text(&text)?;
        Ok(Word::Arithmetic(WordArithmetic {
            body: Box::new(body),
            range: Range {
                begin: dollar_pos,
                end: self.lexer.position(),
            },
        }))
    }

    /// Parses a backquoted command substitution. The cursor must be at the
    /// opening `` ` ``.
    ///
    /// The quoted text is collected first — a backslash escapes `` ` `` and
    /// `\` — and then parsed as a program by a nested parser over the
    /// collected buffer.
    pub(crate) fn back_quotes(&mut self) -> Result<Word> {
        let begin = self.lexer.position();
        self.lexer.read_char()?;

        let mut text = String::new();
        loop {
            match self.lexer.read_char()? {
                None => {
                    return Err(crate::parser::Error::syntax(
                        SyntaxError::UnterminatedBackquotes,
                        begin,
                    ));
                }
                Some('`') => break,
                Some('\\') => match self.lexer.peek_char()? {
                    Some(escaped @ ('`' | '\\')) => {
                        self.lexer.read_char()?;
                        text.push(escaped);
                    }
                    _ => text.push('\\'),
                },
                Some(c) => text.push(c),
            }
        }
        let end = self.lexer.position();

        let mut sub = Parser::from_memory(&text);
        let program = sub.parse_program()?;

        Ok(Word::Command(WordCommand {
            program: (!program.body.is_empty()).then_some(program),
            back_quoted: true,
            range: Range { begin, end },
        }))
    }

    /// Parses a string in which only `$` and backquote expansions are
    /// recognized.
    ///
    /// This is how here-document lines (under an unquoted delimiter) and
    /// arithmetic expansion bodies are interpreted: quotes are literal, a
    /// backslash escapes only `$`, `` ` `` and `\`.
    pub(crate) fn expanded_text(text: &str) -> Result<Word> {
        let mut parser = Parser::from_memory(text);
        let mut builder = WordBuilder::new();
        loop {
            match parser.lexer.peek_char()? {
                None => break,
                Some('$') => builder.push_word(parser.dollar()?),
                Some('`') => builder.push_word(parser.back_quotes()?),
                Some('\\') => {
                    let pos = parser.lexer.position();
                    parser.lexer.read_char()?;
                    match parser.lexer.peek_char()? {
                        Some(escaped @ ('$' | '`' | '\\')) => {
                            parser.lexer.read_char()?;
                            builder.push_char(escaped, pos);
                        }
                        _ => builder.push_char('\\', pos),
                    }
                }
                Some(c) => {
                    let pos = parser.lexer.position();
                    parser.lexer.read_char()?;
                    builder.push_char(c, pos);
                }
            }
        }

        Ok(builder.into_word().unwrap_or_else(|| {
            Word::String(WordString {
                str: String::new(),
                single_quoted: false,
                range: Range::default(),
            })
        }))
    }
}

fn parameter(name: String, dollar_pos: Position, name_range: Range) -> Word {
    Word::Parameter(WordParameter {
        name,
        op: ParamOp::None,
        colon: false,
        arg: None,
        dollar_pos,
        name_range,
        lbrace_pos: Position::default(),
        rbrace_pos: Position::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::ErrorCause;
    use assert_matches::assert_matches;

    fn parse_word(text: &str) -> Word {
        let mut parser = Parser::from_memory(text);
        parser.word().unwrap().unwrap()
    }

    #[test]
    fn no_word_before_operators_and_newlines() {
        for text in ["", "&& x", "\nfoo", "| x", ";"] {
            let mut parser = Parser::from_memory(text);
            assert_eq!(parser.word().unwrap(), None, "input {text:?}");
        }
    }

    #[test]
    fn plain_word_is_a_single_string() {
        assert_matches!(parse_word("hello世界"), Word::String(ws) => {
            assert_eq!(ws.str, "hello世界");
            assert!(!ws.single_quoted);
            assert_eq!(ws.range.begin.offset, 0);
        });
    }

    #[test]
    fn word_stops_at_delimiters() {
        let mut parser = Parser::from_memory("ab cd");
        assert_eq!(parse_literal(&mut parser), "ab");

        let mut parser = Parser::from_memory("ab|cd");
        assert_eq!(parse_literal(&mut parser), "ab");

        let mut parser = Parser::from_memory("ab)cd");
        assert_eq!(parse_literal(&mut parser), "ab");
    }

    fn parse_literal(parser: &mut Parser) -> String {
        parser.word().unwrap().unwrap().literal_str().unwrap()
    }

    #[test]
    fn single_quoted_word() {
        assert_matches!(parse_word("'a b'"), Word::String(ws) => {
            assert_eq!(ws.str, "a b");
            assert!(ws.single_quoted);
        });
    }

    #[test]
    fn single_quotes_keep_everything_literal() {
        assert_matches!(parse_word(r#"'$x `y` \'"#), Word::String(ws) => {
            assert_eq!(ws.str, r"$x `y` \");
        });
    }

    #[test]
    fn unterminated_single_quote_is_committed() {
        let mut parser = Parser::from_memory("'abc");
        let error = parser.word().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::UnterminatedSingleQuotes)
        );
        assert_eq!(error.position.column, 1);
    }

    #[test]
    fn concatenation_becomes_a_list() {
        assert_matches!(parse_word("a'b'c"), Word::List(wl) => {
            assert!(!wl.double_quoted);
            assert_eq!(wl.children.len(), 3);
            assert_matches!(&wl.children[1], Word::String(ws) => assert!(ws.single_quoted));
        });
    }

    #[test]
    fn double_quoted_word() {
        assert_matches!(parse_word(r#""a $x b""#), Word::List(wl) => {
            assert!(wl.double_quoted);
            assert_eq!(wl.children.len(), 3);
            assert_matches!(&wl.children[1], Word::Parameter(wp) => {
                assert_eq!(wp.name, "x");
            });
        });
    }

    #[test]
    fn double_quote_escapes() {
        assert_matches!(parse_word(r#""a\$b\nc""#), Word::List(wl) => {
            assert_eq!(wl.children.len(), 1);
            assert_matches!(&wl.children[0], Word::String(ws) => {
                // `\$` is an escape; `\n` is not, so the backslash stays.
                assert_eq!(ws.str, r"a$b\nc");
            });
        });
    }

    #[test]
    fn unterminated_double_quote_is_committed() {
        let mut parser = Parser::from_memory("\"abc");
        let error = parser.word().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::UnterminatedDoubleQuotes)
        );
    }

    #[test]
    fn backslash_escapes_one_character() {
        assert_matches!(parse_word(r"a\ b"), Word::List(wl) => {
            assert_eq!(wl.children.len(), 3);
            assert_matches!(&wl.children[1], Word::String(ws) => {
                assert_eq!(ws.str, " ");
                assert!(ws.single_quoted);
            });
        });
    }

    #[test]
    fn simple_parameter_expansion() {
        assert_matches!(parse_word("$menu_timeout"), Word::Parameter(wp) => {
            assert_eq!(wp.name, "menu_timeout");
            assert_eq!(wp.op, ParamOp::None);
            assert!(!wp.colon);
            assert_eq!(wp.arg, None);
            assert_eq!(wp.dollar_pos.offset, 0);
            assert_eq!(wp.name_range.begin.offset, 1);
            assert_eq!(wp.name_range.end.offset, 13);
            assert!(!wp.lbrace_pos.is_valid());
        });
    }

    #[test]
    fn special_and_positional_parameters() {
        assert_matches!(parse_word("$?"), Word::Parameter(wp) => assert_eq!(wp.name, "?"));
        assert_matches!(parse_word("$#"), Word::Parameter(wp) => assert_eq!(wp.name, "#"));
        // Unbraced positionals are single-digit.
        assert_matches!(parse_word("$12"), Word::List(wl) => {
            assert_matches!(&wl.children[0], Word::Parameter(wp) => assert_eq!(wp.name, "1"));
            assert_matches!(&wl.children[1], Word::String(ws) => assert_eq!(ws.str, "2"));
        });
        assert_matches!(parse_word("${12}"), Word::Parameter(wp) => assert_eq!(wp.name, "12"));
    }

    #[test]
    fn lone_dollar_is_literal() {
        assert_matches!(parse_word("$"), Word::String(ws) => assert_eq!(ws.str, "$"));
        assert_matches!(parse_word("a$"), Word::List(wl) => {
            assert_eq!(wl.children.len(), 2);
        });
    }

    #[test]
    fn braced_parameter_operators() {
        assert_matches!(parse_word("${x:-default}"), Word::Parameter(wp) => {
            assert_eq!(wp.op, ParamOp::Minus);
            assert!(wp.colon);
            assert_eq!(wp.arg.as_ref().unwrap().literal_str().unwrap(), "default");
            assert!(wp.lbrace_pos.is_valid());
            assert!(wp.rbrace_pos.is_valid());
        });

        assert_matches!(parse_word("${x=y}"), Word::Parameter(wp) => {
            assert_eq!(wp.op, ParamOp::Equal);
            assert!(!wp.colon);
        });

        assert_matches!(parse_word("${#x}"), Word::Parameter(wp) => {
            assert_eq!(wp.op, ParamOp::LeadingHash);
            assert_eq!(wp.name, "x");
            assert_eq!(wp.arg, None);
        });

        assert_matches!(parse_word("${x##*/}"), Word::Parameter(wp) => {
            assert_eq!(wp.op, ParamOp::DHash);
            assert_eq!(wp.arg.as_ref().unwrap().literal_str().unwrap(), "*/");
        });

        assert_matches!(parse_word("${x%.img}"), Word::Parameter(wp) => {
            assert_eq!(wp.op, ParamOp::Percent);
        });
    }

    #[test]
    fn braced_parameter_argument_may_contain_blanks() {
        assert_matches!(parse_word("${x-two words}"), Word::Parameter(wp) => {
            assert_eq!(wp.arg.as_ref().unwrap().literal_str().unwrap(), "two words");
        });
    }

    #[test]
    fn empty_parameter_name_is_committed() {
        let mut parser = Parser::from_memory("${}");
        let error = parser.word().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedParameterName)
        );
    }

    #[test]
    fn unclosed_parameter_expansion_is_committed() {
        let mut parser = Parser::from_memory("${x");
        let error = parser.word().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedToken("}"))
        );
    }

    #[test]
    fn command_substitution() {
        assert_matches!(parse_word("$(echo hi)"), Word::Command(wc) => {
            assert!(!wc.back_quoted);
            assert_eq!(wc.program.as_ref().unwrap().to_string(), "echo hi");
            assert_eq!(wc.range.begin.offset, 0);
            assert_eq!(wc.range.end.offset, 10);
        });
    }

    #[test]
    fn empty_command_substitution() {
        assert_matches!(parse_word("$()"), Word::Command(wc) => {
            assert_eq!(wc.program, None);
        });
    }

    #[test]
    fn nested_command_substitution() {
        assert_matches!(parse_word("$(a $(b))"), Word::Command(wc) => {
            assert_eq!(wc.program.as_ref().unwrap().to_string(), "a $(b)");
        });
    }

    #[test]
    fn unclosed_command_substitution_is_committed() {
        let mut parser = Parser::from_memory("$(echo hi");
        let error = parser.word().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedToken(")"))
        );
    }

    #[test]
    fn back_quoted_substitution() {
        assert_matches!(parse_word("`uname -r`"), Word::Command(wc) => {
            assert!(wc.back_quoted);
            assert_eq!(wc.program.as_ref().unwrap().to_string(), "uname -r");
        });
    }

    #[test]
    fn back_quotes_unescape_backquote_and_backslash() {
        assert_matches!(parse_word(r"`outer \`inner\``"), Word::Command(wc) => {
            assert_eq!(wc.program.as_ref().unwrap().to_string(), "outer `inner`");
        });
    }

    #[test]
    fn unterminated_back_quotes_are_committed() {
        let mut parser = Parser::from_memory("`abc");
        let error = parser.word().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::UnterminatedBackquotes)
        );
    }

    #[test]
    fn arithmetic_expansion() {
        assert_matches!(parse_word("$((1 + 2))"), Word::Arithmetic(wa) => {
            assert_eq!(wa.body.literal_str().unwrap(), "1 + 2");
            assert_eq!(wa.range.begin.offset, 0);
            assert_eq!(wa.range.end.offset, 10);
        });
    }

    #[test]
    fn arithmetic_expansion_with_nested_parens_and_expansions() {
        assert_matches!(parse_word("$(((a + $b) * 2))"), Word::Arithmetic(wa) => {
            assert_matches!(&*wa.body, Word::List(wl) => {
                assert!(wl.children.iter().any(|c| matches!(c, Word::Parameter(_))));
            });
        });
    }

    #[test]
    fn unterminated_arithmetic_is_committed() {
        let mut parser = Parser::from_memory("$((1 + 2");
        let error = parser.word().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedToken("))"))
        );
    }

    #[test]
    fn expanded_text_keeps_quotes_literal() {
        let word = Parser::expanded_text("say 'hi' to $USER").unwrap();
        assert_matches!(word, Word::List(wl) => {
            assert_matches!(&wl.children[0], Word::String(ws) => {
                assert_eq!(ws.str, "say 'hi' to ");
            });
            assert_matches!(&wl.children[1], Word::Parameter(wp) => {
                assert_eq!(wp.name, "USER");
            });
        });
    }

    #[test]
    fn expanded_text_backslash_rules() {
        let word = Parser::expanded_text(r"a\$b \n").unwrap();
        assert_eq!(word.literal_str().unwrap(), r"a$b \n");
    }

    #[test]
    fn expanded_text_of_empty_line() {
        let word = Parser::expanded_text("").unwrap();
        assert_eq!(word.literal_str().unwrap(), "");
    }
}
