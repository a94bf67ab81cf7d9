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

//! Syntax parser for function definitions.

use super::core::{Parser, Result};
use super::error::SyntaxError;
use crate::syntax::FunctionDefinition;

impl Parser<'_> {
    /// Parses a function definition, `name ( ) compound-command`.
    ///
    /// The decision is made by looking ahead for a `(` after the name
    /// (blanks allowed); without one, this is not a function definition and
    /// nothing is consumed. The name must be a valid name, which also keeps
    /// reserved words out.
    pub(crate) fn function_definition(&mut self) -> Result<Option<FunctionDefinition>> {
        let name_len = self.lexer.peek_name_len()?;
        if name_len == 0 {
            return Ok(None);
        }

        let mut i = name_len;
        loop {
            match self.lexer.peek_at_char(i)? {
                Some('(') => break,
                Some(c) if c == ' ' || c == '\t' => i += 1,
                _ => return Ok(None),
            }
        }

        let (name, name_range) = self.lexer.read_token(name_len)?;
        let lparen = self.lexer.expect_token("(")?;
        let rparen = self.lexer.expect_token(")")?;

        self.linebreak()?;

        let Some(body) = self.compound_command()? else {
            return Err(self.error_here(SyntaxError::ExpectedCompoundCommand));
        };

        let mut io_redirects = Vec::new();
        while let Some(redir) = self.io_redirect()? {
            io_redirects.push(redir);
        }

        Ok(Some(FunctionDefinition {
            name,
            body: Box::new(body),
            io_redirects,
            name_range,
            lparen_pos: lparen.begin,
            rparen_pos: rparen.begin,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::ErrorCause;
    use crate::syntax::Command;
    use assert_matches::assert_matches;

    fn parse_function(text: &str) -> FunctionDefinition {
        let mut parser = Parser::from_memory(text);
        parser.function_definition().unwrap().unwrap()
    }

    #[test]
    fn function_with_brace_group_body() {
        let function = parse_function("foo() { bar; }");
        assert_eq!(function.name, "foo");
        assert_matches!(&*function.body, Command::BraceGroup(bg) => {
            assert_eq!(bg.body.len(), 1);
        });
        assert_eq!(function.name_range.begin.column, 1);
        assert_eq!(function.lparen_pos.column, 4);
        assert_eq!(function.rparen_pos.column, 5);
        assert_eq!(function.io_redirects.len(), 0);
    }

    #[test]
    fn blanks_between_name_and_parentheses() {
        let function = parse_function("draw_menu  ( ) { render; }");
        assert_eq!(function.name, "draw_menu");
        assert_eq!(function.lparen_pos.column, 12);
    }

    #[test]
    fn body_may_be_any_compound_command() {
        let function = parse_function("countdown() (sleep $timeout)");
        assert_matches!(&*function.body, Command::Subshell(_));

        let function = parse_function("retry() until ok; do try; done");
        assert_matches!(&*function.body, Command::Loop(_));
    }

    #[test]
    fn body_may_follow_a_newline() {
        let function = parse_function("setup()\n{ a; }");
        assert_matches!(&*function.body, Command::BraceGroup(_));
    }

    #[test]
    fn redirects_attach_to_the_definition() {
        let function = parse_function("log_boot() { dmesg; } >boot.log 2>&1");
        assert_eq!(function.io_redirects.len(), 2);
    }

    #[test]
    fn not_a_function_definition() {
        let mut parser = Parser::from_memory("foo bar");
        assert_eq!(parser.function_definition().unwrap(), None);

        let mut parser = Parser::from_memory("foo");
        assert_eq!(parser.function_definition().unwrap(), None);

        // A name is required, so a glob-ish word is not one.
        let mut parser = Parser::from_memory("2fn() { a; }");
        assert_eq!(parser.function_definition().unwrap(), None);
    }

    #[test]
    fn simple_command_body_is_committed() {
        let mut parser = Parser::from_memory("foo() bar");
        let error = parser.function_definition().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedCompoundCommand)
        );
    }

    #[test]
    fn missing_closing_parenthesis_is_committed() {
        let mut parser = Parser::from_memory("foo( { a; }");
        let error = parser.function_definition().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedToken(")"))
        );
    }
}
