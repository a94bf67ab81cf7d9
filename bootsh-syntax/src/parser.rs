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

//! Syntax parser for the shell language.
//!
//! The parser is a recursive-descent engine with one method per grammar
//! production and backtracking-free lookahead: each production inspects the
//! next [symbol](lex::Symbol) (and sometimes a few characters) without
//! consuming it, and either commits to its alternative or declines so the
//! caller can try the next one. See [`Parser`] for the three-state result
//! contract productions follow, and the [`lex`] module for the symbol
//! protocol.
//!
//! Use [`Parser::parse_program`] to parse a whole script, or
//! [`Parser::parse_line`] to parse line by line interactively. For one-off
//! parsing of a string, the `FromStr` implementations on
//! [`Program`](crate::syntax::Program) and [`Word`](crate::syntax::Word)
//! wrap the same machinery:
//!
//! ```
//! # use bootsh_syntax::syntax::Program;
//! let program: Program = "if probe; then boot; fi".parse().unwrap();
//! ```

mod core;
mod error;

mod case;
mod compound_command;
mod for_loop;
mod from_str;
mod function;
mod grouping;
mod r#if;
mod list;
mod pipeline;
mod redir;
mod simple_command;
mod while_loop;
mod word;

pub mod lex;

pub use self::core::{Parser, Result};
pub use self::error::{Error, ErrorCause, SyntaxError};
