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

//! Definition of errors that happen in the parser.
//!
//! A production that began matching and cannot complete reports an [`Error`]
//! carrying a [`SyntaxError`] and the position at which the parse stopped.
//! Such errors are *committed*: they propagate to the caller instead of
//! letting the parser try another grammar alternative. A production that
//! simply does not apply returns `Ok(None)` and raises no error at all.

use crate::source::Position;
use std::fmt;
use std::rc::Rc;
use thiserror::Error as ThisError;

/// Types of syntax errors.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SyntaxError {
    /// A required token is missing.
    #[error("expected '{0}'")]
    ExpectedToken(&'static str),
    /// A compound command is missing its body.
    #[error("expected a compound list")]
    ExpectedCompoundList,
    /// No command could be parsed where one is required.
    #[error("expected a complete command")]
    ExpectedCompleteCommand,
    /// A command is missing after `!` or `|`.
    #[error("expected a command")]
    ExpectedCommand,
    /// A pipeline is missing after `&&` or `||`.
    #[error("expected an AND-OR list")]
    ExpectedAndOrList,
    /// The variable name is missing in a `for` loop.
    #[error("expected name")]
    ExpectedName,
    /// The word list of a `for` loop is not terminated.
    #[error("expected sequential separator")]
    ExpectedSequentialSeparator,
    /// A word is missing, e.g. a `case` subject or pattern.
    #[error("expected a word")]
    ExpectedWord,
    /// A function definition body is not a compound command.
    #[error("expected a compound command")]
    ExpectedCompoundCommand,
    /// A line must end here.
    #[error("expected a newline")]
    ExpectedNewline,
    /// A queued here-document never saw the newline that starts its body.
    #[error("expected a newline followed by a here-document")]
    ExpectedHereDocument,
    /// The end of input was reached before a here-document delimiter.
    #[error("unterminated here-document")]
    UnterminatedHereDocument,
    /// A here-document operator is missing its delimiter word.
    #[error("expected a name after IO here-document redirection operator")]
    ExpectedHereDocDelimiter,
    /// A file redirection operator is missing its operand.
    #[error("expected a filename after IO file redirection operator")]
    ExpectedFilename,
    /// An IO number is not followed by a redirection operator.
    #[error("expected an IO redirect after IO number")]
    ExpectedRedirect,
    /// A here-document delimiter contains an expansion.
    #[error("here-document delimiter must be a literal word")]
    NonLiteralHereDocDelimiter,
    /// A reserved word with unspecified behavior was used.
    #[error("keyword is reserved and causes unspecified results: {0}")]
    ReservedWord(String),
    /// A word of the form `name:` was used as a command.
    #[error("words that are the concatenation of a name and a colon produce unspecified results")]
    NameColon,
    /// A single quotation lacks a closing `'`.
    #[error("single quotes not terminated")]
    UnterminatedSingleQuotes,
    /// A double quotation lacks a closing `"`.
    #[error("double quotes not terminated")]
    UnterminatedDoubleQuotes,
    /// A backquoted command substitution lacks a closing `` ` ``.
    #[error("back-quotes not terminated")]
    UnterminatedBackquotes,
    /// A parameter expansion lacks a name.
    #[error("expected a parameter name")]
    ExpectedParameterName,
}

/// Types of errors that may happen in parsing.
#[derive(Clone, Debug)]
pub enum ErrorCause {
    /// Error in the underlying input function.
    Io(Rc<std::io::Error>),
    /// Syntax error.
    Syntax(SyntaxError),
}

impl PartialEq for ErrorCause {
    /// Compares two error causes.
    ///
    /// IO errors compare unequal because [`std::io::Error`] does not support
    /// comparison.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCause::Syntax(e1), ErrorCause::Syntax(e2)) => e1 == e2,
            _ => false,
        }
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCause::Io(e) => write!(f, "error while reading commands: {e}"),
            ErrorCause::Syntax(e) => e.fmt(f),
        }
    }
}

impl From<Rc<std::io::Error>> for ErrorCause {
    fn from(e: Rc<std::io::Error>) -> ErrorCause {
        ErrorCause::Io(e)
    }
}

impl From<std::io::Error> for ErrorCause {
    fn from(e: std::io::Error) -> ErrorCause {
        ErrorCause::from(Rc::new(e))
    }
}

impl From<SyntaxError> for ErrorCause {
    fn from(e: SyntaxError) -> ErrorCause {
        ErrorCause::Syntax(e)
    }
}

/// Explanation of a committed parse failure.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    /// What went wrong.
    pub cause: ErrorCause,
    /// Position at which the parse stopped.
    pub position: Position,
}

impl Error {
    /// Creates a syntax error at the given position.
    #[must_use]
    pub fn syntax(cause: SyntaxError, position: Position) -> Error {
        Error {
            cause: cause.into(),
            position,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.position.is_valid() {
            write!(f, "{}:{}: {}", self.position.line, self.position.column, self.cause)
        } else {
            self.cause.fmt(f)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            ErrorCause::Io(e) => Some(&**e),
            ErrorCause::Syntax(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_messages() {
        assert_eq!(
            SyntaxError::ExpectedToken("fi").to_string(),
            "expected 'fi'"
        );
        assert_eq!(
            SyntaxError::UnterminatedHereDocument.to_string(),
            "unterminated here-document"
        );
        assert_eq!(
            SyntaxError::ReservedWord("select".to_string()).to_string(),
            "keyword is reserved and causes unspecified results: select"
        );
    }

    #[test]
    fn io_errors_never_compare_equal() {
        let make = || {
            ErrorCause::from(std::io::Error::new(
                std::io::ErrorKind::Other,
                "device gone",
            ))
        };
        assert_ne!(make(), make());
        let e = make();
        assert_ne!(e.clone(), e);
    }

    #[test]
    fn error_display_includes_position() {
        let error = Error::syntax(
            SyntaxError::ExpectedToken("fi"),
            Position {
                offset: 20,
                line: 2,
                column: 1,
            },
        );
        assert_eq!(error.to_string(), "2:1: expected 'fi'");
    }
}
