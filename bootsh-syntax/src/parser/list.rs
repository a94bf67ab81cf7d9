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

//! Syntax parser for command lists and whole programs.

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Symbol;
use crate::source::{Position, Range};
use crate::syntax::{CommandList, Program};

impl Parser<'_> {
    /// Parses a `;` or `&` separator. Returns the background flag and the
    /// separator's range.
    fn separator_op(&mut self) -> Result<Option<(bool, Range)>> {
        if let Some(range) = self.lexer.eat_token("&")? {
            return Ok(Some((true, range)));
        }
        if let Some(range) = self.lexer.eat_token(";")? {
            return Ok(Some((false, range)));
        }
        Ok(None)
    }

    /// Parses a `;` followed by optional newlines, or one or more newlines.
    pub(crate) fn sequential_sep(&mut self) -> Result<bool> {
        if self.lexer.eat_token(";")?.is_some() {
            self.linebreak()?;
            return Ok(true);
        }
        self.newline_list()
    }

    /// Parses one and-or list with its separator inside a compound list,
    /// where a newline also separates.
    fn term(&mut self) -> Result<Option<CommandList>> {
        let Some(and_or_list) = self.and_or()? else {
            return Ok(None);
        };

        let mut list = CommandList {
            and_or_list,
            ampersand: false,
            separator_pos: Position::default(),
        };

        if let Some((ampersand, range)) = self.separator_op()? {
            list.ampersand = ampersand;
            list.separator_pos = range.begin;
            self.linebreak()?;
        } else {
            let position = self.lexer.position();
            if self.newline_list()? {
                list.separator_pos = position;
            }
        }

        Ok(Some(list))
    }

    /// Parses a compound list: the body of a compound command.
    ///
    /// Returns `Ok(None)` if no term can be parsed at all.
    pub(crate) fn compound_list(&mut self) -> Result<Option<Vec<CommandList>>> {
        self.linebreak()?;

        let Some(first) = self.term()? else {
            return Ok(None);
        };
        let mut lists = vec![first];
        while let Some(list) = self.term()? {
            lists.push(list);
        }
        Ok(Some(lists))
    }

    /// Parses a compound list, or reports `expected a compound list`.
    pub(crate) fn expect_compound_list(&mut self) -> Result<Vec<CommandList>> {
        match self.compound_list()? {
            Some(lists) => Ok(lists),
            None => Err(self.error_here(SyntaxError::ExpectedCompoundList)),
        }
    }

    /// Parses one and-or list with an optional `;` or `&` separator at the
    /// outermost level, where a newline terminates the command line instead
    /// of separating.
    fn list(&mut self) -> Result<Option<CommandList>> {
        let Some(and_or_list) = self.and_or()? else {
            return Ok(None);
        };

        let mut list = CommandList {
            and_or_list,
            ampersand: false,
            separator_pos: Position::default(),
        };
        if let Some((ampersand, range)) = self.separator_op()? {
            list.ampersand = ampersand;
            list.separator_pos = range.begin;
        }
        Ok(Some(list))
    }

    /// Parses one command line's worth of lists.
    ///
    /// If here-documents are queued after the last list, the next symbol
    /// must be the newline that starts their bodies; the newline itself is
    /// left for the caller.
    pub(crate) fn complete_command(&mut self) -> Result<Option<Vec<CommandList>>> {
        let mut lists = Vec::new();
        while let Some(list) = self.list()? {
            lists.push(list);
        }
        if lists.is_empty() {
            return Ok(None);
        }

        if self.has_pending_here_docs() && self.lexer.next_symbol()? != Symbol::Newline {
            return Err(self.error_here(SyntaxError::ExpectedHereDocument));
        }

        Ok(Some(lists))
    }

    /// Parses as many complete commands as the input offers.
    ///
    /// Leftover input that does not start a command is left unconsumed;
    /// [`parse_program`](Parser::parse_program) turns it into an error,
    /// while embedded-program parsing (command substitution) expects it to
    /// be the closing delimiter.
    pub(crate) fn program(&mut self) -> Result<Program> {
        let mut program = Program::default();
        self.linebreak()?;

        while let Some(mut lists) = self.complete_command()? {
            program.body.append(&mut lists);
            if !self.newline_list()? {
                break;
            }
        }
        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::ErrorCause;
    use crate::syntax::AndOrList;
    use assert_matches::assert_matches;

    fn parse(text: &str) -> Program {
        let mut parser = Parser::from_memory(text);
        parser.parse_program().unwrap()
    }

    #[test]
    fn semicolon_separates_lists() {
        let program = parse("init; load kernel; boot");
        assert_eq!(program.body.len(), 3);
        assert!(!program.body[0].ampersand);
        assert_eq!(program.body[0].separator_pos.column, 5);
        assert!(!program.body[2].separator_pos.is_valid());
    }

    #[test]
    fn ampersand_marks_background_lists() {
        let program = parse("spinner & boot");
        assert_eq!(program.body.len(), 2);
        assert!(program.body[0].ampersand);
        assert!(!program.body[1].ampersand);
    }

    #[test]
    fn newlines_separate_complete_commands() {
        let program = parse("one\ntwo\n\nthree\n");
        assert_eq!(program.body.len(), 3);
    }

    #[test]
    fn leading_and_trailing_blank_lines() {
        let program = parse("\n\n  # comment\nuname\n\n");
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn here_doc_body_follows_the_line() {
        let program = parse("cat <<EOF; echo after\nline one\nline two\nEOF\nnext\n");
        assert_eq!(program.body.len(), 3);

        assert_matches!(&program.body[0].and_or_list, AndOrList::Pipeline(p) => {
            assert_matches!(&p.commands[0], crate::syntax::Command::Simple(sc) => {
                let body = sc.io_redirects[0].here_document.as_ref().unwrap();
                let lines: Vec<String> =
                    body.lines().iter().map(|l| l.literal_str().unwrap()).collect();
                assert_eq!(lines, ["line one", "line two"]);
            });
        });
    }

    #[test]
    fn two_here_docs_on_one_line_fill_in_order() {
        let program = parse("cat <<ONE <<TWO\nfirst\nONE\nsecond\nTWO\n");
        assert_matches!(&program.body[0].and_or_list, AndOrList::Pipeline(p) => {
            assert_matches!(&p.commands[0], crate::syntax::Command::Simple(sc) => {
                let one = sc.io_redirects[0].here_document.as_ref().unwrap();
                assert_eq!(one.lines()[0].literal_str().unwrap(), "first");
                let two = sc.io_redirects[1].here_document.as_ref().unwrap();
                assert_eq!(two.lines()[0].literal_str().unwrap(), "second");
            });
        });
    }

    #[test]
    fn here_doc_without_newline_is_committed() {
        let mut parser = Parser::from_memory("cat <<EOF");
        let error = parser.parse_program().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedHereDocument)
        );
    }

    #[test]
    fn unterminated_here_doc_is_committed() {
        let mut parser = Parser::from_memory("cat <<EOF\nno end in sight\n");
        let error = parser.parse_program().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::UnterminatedHereDocument)
        );
        // The error points at the `<<` operator.
        assert_eq!(error.position.column, 5);
    }

    #[test]
    fn quoted_delimiter_suppresses_expansion() {
        let program = parse("cat <<'EOF'\n$not_expanded\nEOF\n");
        assert_matches!(&program.body[0].and_or_list, AndOrList::Pipeline(p) => {
            assert_matches!(&p.commands[0], crate::syntax::Command::Simple(sc) => {
                let body = sc.io_redirects[0].here_document.as_ref().unwrap();
                assert_matches!(&body.lines()[0], crate::syntax::Word::String(ws) => {
                    assert_eq!(ws.str, "$not_expanded");
                    assert!(ws.single_quoted);
                });
            });
        });
    }

    #[test]
    fn unquoted_delimiter_expands_lines() {
        let program = parse("cat <<EOF\nkernel $version\nEOF\n");
        assert_matches!(&program.body[0].and_or_list, AndOrList::Pipeline(p) => {
            assert_matches!(&p.commands[0], crate::syntax::Command::Simple(sc) => {
                let body = sc.io_redirects[0].here_document.as_ref().unwrap();
                assert_matches!(&body.lines()[0], crate::syntax::Word::List(wl) => {
                    assert_matches!(&wl.children[1], crate::syntax::Word::Parameter(wp) => {
                        assert_eq!(wp.name, "version");
                    });
                });
            });
        });
    }

    #[test]
    fn tab_stripping_with_dless_dash() {
        let program = parse("cat <<-EOF\n\tindented\n\tEOF\n");
        assert_matches!(&program.body[0].and_or_list, AndOrList::Pipeline(p) => {
            assert_matches!(&p.commands[0], crate::syntax::Command::Simple(sc) => {
                let body = sc.io_redirects[0].here_document.as_ref().unwrap();
                assert_eq!(body.lines()[0].literal_str().unwrap(), "indented");
            });
        });
    }
}
