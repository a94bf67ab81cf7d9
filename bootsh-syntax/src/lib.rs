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

//! Shell language syntax and parser.
//!
//! This crate defines data types for constructing abstract syntax trees
//! (AST) of the shell language bootsh uses to script its boot menus. See
//! the [`syntax`] module for the node types and their utilities
//! (re-serialization, deep copy, traversal, source ranges).
//!
//! To parse source code into an AST, you can call `parse` on a `&str`
//! through the [`FromStr`](std::str::FromStr) implementations of the AST
//! types, or drive a [parser](parser::Parser) yourself for streaming and
//! line-by-line use. The [`input`] module defines the abstract character
//! source feeding the parser, and the [`alias`] module the hook through
//! which the host environment supplies alias definitions recognized while
//! parsing.
//!
//! The parser builds trees; it does not evaluate them. Expansion semantics,
//! command execution and the boot environment live in the evaluator, which
//! consumes the [`Program`](syntax::Program) produced here and must treat
//! it as immutable.

pub mod alias;
pub mod input;
pub mod parser;
pub mod source;
pub mod syntax;
