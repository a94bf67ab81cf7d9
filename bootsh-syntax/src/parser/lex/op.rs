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

//! Part of the lexer that recognizes operators.

use std::fmt;

/// Multi-character operator token identifier.
///
/// Single-character punctuation (`;`, `&`, `|`, `(`, `)`, `<`, `>`, `{`,
/// `}`, `!`) is not an operator; the lexer classifies it as an ordinary
/// token and the grammar matches it by string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    /// `&&`
    AndIf,
    /// `||`
    OrIf,
    /// `;;`
    DSemi,
    /// `<<`
    DLess,
    /// `<<-`
    DLessDash,
    /// `>>`
    DGreat,
    /// `<&`
    LessAnd,
    /// `>&`
    GreatAnd,
    /// `<>`
    LessGreat,
    /// `>|`
    Clobber,
}

/// All operators, longest first so that prefix ambiguities resolve to the
/// longest match.
const OPERATORS: &[(Operator, &str)] = &[
    (Operator::DLessDash, "<<-"),
    (Operator::AndIf, "&&"),
    (Operator::OrIf, "||"),
    (Operator::DSemi, ";;"),
    (Operator::DLess, "<<"),
    (Operator::DGreat, ">>"),
    (Operator::LessAnd, "<&"),
    (Operator::GreatAnd, ">&"),
    (Operator::LessGreat, "<>"),
    (Operator::Clobber, ">|"),
];

impl Operator {
    /// Returns the source text of the operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        OPERATORS
            .iter()
            .find(|(op, _)| *op == self)
            .map(|(_, s)| *s)
            .unwrap()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matches the longest operator starting with the given lookahead
/// characters.
#[must_use]
pub(crate) fn recognize(c0: char, c1: Option<char>, c2: Option<char>) -> Option<Operator> {
    let lookahead = [Some(c0), c1, c2];
    OPERATORS
        .iter()
        .find(|(_, s)| {
            s.chars()
                .zip(&lookahead)
                .all(|(expected, actual)| Some(expected) == *actual)
        })
        .map(|(op, _)| *op)
}
