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

//! Syntax parser for pipelines and and-or lists.

use super::core::{Parser, Result};
use super::error::SyntaxError;
use super::lex::Operator;
use crate::source::Position;
use crate::syntax::{AndOrList, Binop, BinopType, Command, Pipeline};

impl Parser<'_> {
    /// Parses a command.
    ///
    /// Alias substitution is applied at this entry point, then the compound
    /// command forms are tried, then a simple command.
    pub(crate) fn command(&mut self) -> Result<Option<Command>> {
        self.apply_aliases()?;

        if let Some(command) = self.compound_command()? {
            return Ok(Some(command));
        }
        Ok(self.simple_command()?.map(Command::Simple))
    }

    /// Parses a pipeline: an optional `!` and one or more commands joined by
    /// `|`.
    pub(crate) fn pipeline(&mut self) -> Result<Option<Pipeline>> {
        let bang_range = self.lexer.eat_token("!")?;

        let Some(first) = self.command()? else {
            // `!` commits to a pipeline; bare lookahead failure does not.
            return if bang_range.is_some() {
                Err(self.error_here(SyntaxError::ExpectedCommand))
            } else {
                Ok(None)
            };
        };

        let mut commands = vec![first];
        while self.lexer.eat_token("|")?.is_some() {
            self.linebreak()?;
            let Some(command) = self.command()? else {
                return Err(self.error_here(SyntaxError::ExpectedCommand));
            };
            commands.push(command);
        }

        Ok(Some(Pipeline {
            commands,
            bang: bang_range.is_some(),
            bang_pos: bang_range.map_or_else(Position::default, |r| r.begin),
        }))
    }

    /// Parses an and-or list: pipelines joined by `&&` and `||`.
    ///
    /// The chain is built by right recursion, so `a && b && c` has `a` on
    /// the left and `b && c` on the right.
    pub(crate) fn and_or(&mut self) -> Result<Option<AndOrList>> {
        let Some(pipeline) = self.pipeline()? else {
            return Ok(None);
        };

        let (r#type, op_range) = if let Some(range) = self.lexer.eat_operator(Operator::AndIf)? {
            (BinopType::And, range)
        } else if let Some(range) = self.lexer.eat_operator(Operator::OrIf)? {
            (BinopType::Or, range)
        } else {
            return Ok(Some(AndOrList::Pipeline(pipeline)));
        };

        self.linebreak()?;
        let Some(right) = self.and_or()? else {
            return Err(self.error_here(SyntaxError::ExpectedAndOrList));
        };

        Ok(Some(AndOrList::Binop(Binop {
            r#type,
            left: Box::new(AndOrList::Pipeline(pipeline)),
            right: Box::new(right),
            op_range,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::ErrorCause;
    use assert_matches::assert_matches;

    fn parse_and_or(text: &str) -> AndOrList {
        let mut parser = Parser::from_memory(text);
        parser.and_or().unwrap().unwrap()
    }

    #[test]
    fn single_command_pipeline() {
        assert_matches!(parse_and_or("uname"), AndOrList::Pipeline(p) => {
            assert_eq!(p.commands.len(), 1);
            assert!(!p.bang);
            assert!(!p.bang_pos.is_valid());
        });
    }

    #[test]
    fn multi_command_pipeline() {
        assert_matches!(parse_and_or("cat log | grep err | wc -l"), AndOrList::Pipeline(p) => {
            assert_eq!(p.commands.len(), 3);
        });
    }

    #[test]
    fn negated_pipeline() {
        assert_matches!(parse_and_or("! grep -q err log"), AndOrList::Pipeline(p) => {
            assert!(p.bang);
            assert_eq!(p.bang_pos.column, 1);
        });
    }

    #[test]
    fn pipeline_continues_after_newline() {
        assert_matches!(parse_and_or("cat log |\n  wc"), AndOrList::Pipeline(p) => {
            assert_eq!(p.commands.len(), 2);
        });
    }

    #[test]
    fn missing_command_after_bar_is_committed() {
        let mut parser = Parser::from_memory("cat | ;");
        let error = parser.and_or().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedCommand)
        );
    }

    #[test]
    fn missing_command_after_bang_is_committed() {
        let mut parser = Parser::from_memory("! &&");
        let error = parser.and_or().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedCommand)
        );
    }

    #[test]
    fn and_or_chain_leans_right() {
        assert_matches!(parse_and_or("echo hello | grep h && echo ok"), AndOrList::Binop(b) => {
            assert_eq!(b.r#type, BinopType::And);
            assert_matches!(&*b.left, AndOrList::Pipeline(p) => {
                assert_eq!(p.commands.len(), 2);
            });
            assert_matches!(&*b.right, AndOrList::Pipeline(p) => {
                assert_eq!(p.commands.len(), 1);
            });
        });

        assert_matches!(parse_and_or("a && b || c"), AndOrList::Binop(b) => {
            assert_eq!(b.r#type, BinopType::And);
            assert_matches!(&*b.left, AndOrList::Pipeline(_));
            assert_matches!(&*b.right, AndOrList::Binop(inner) => {
                assert_eq!(inner.r#type, BinopType::Or);
            });
        });
    }

    #[test]
    fn operator_position_is_recorded() {
        assert_matches!(parse_and_or("a && b"), AndOrList::Binop(b) => {
            assert_eq!(b.op_range.begin.column, 3);
            assert_eq!(b.op_range.end.column, 5);
        });
    }

    #[test]
    fn missing_right_operand_is_committed() {
        let mut parser = Parser::from_memory("a &&");
        let error = parser.and_or().unwrap_err();
        assert_eq!(
            error.cause,
            ErrorCause::Syntax(SyntaxError::ExpectedAndOrList)
        );
    }

    #[test]
    fn and_or_continues_after_newline() {
        assert_matches!(parse_and_or("a &&\n\nb"), AndOrList::Binop(_));
    }
}
