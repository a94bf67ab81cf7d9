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

//! Lexical analyzer.
//!
//! The [`Lexer`] maintains a rolling buffer of characters read from an
//! [`Input`](crate::input::Input) and classifies the next lexical unit
//! without consuming it: [`next_symbol`](Lexer::next_symbol) tells whether
//! an operator, a newline, the end of input or an ordinary token comes next,
//! and [`consume_symbol`](Lexer::consume_symbol) commits the decision once a
//! grammar production has read the characters. Multi-character operators are
//! recognized greedily, so `<<-` is never mistaken for `<<` followed by
//! `-`.
//!
//! The grammar engine and the word expander consume individual characters
//! through [`peek_char`](Lexer::peek_char)/[`read_char`](Lexer::read_char)
//! and the token matchers defined in this module.

mod core;
mod heredoc;
mod keyword;
mod op;
mod token;

pub use self::core::{Lexer, Symbol, is_blank, is_word_delimiter};
pub use self::keyword::Keyword;
pub use self::op::Operator;
