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

use super::*;

impl Word {
    /// Computes the source span of this word.
    ///
    /// An empty [`Word::List`] has no source of its own and yields an
    /// invalid range.
    #[must_use]
    pub fn range(&self) -> Range {
        match self {
            Word::String(ws) => ws.range,
            Word::Parameter(wp) => Range {
                begin: wp.dollar_pos,
                // Unbraced expansions end with the name.
                end: if wp.rbrace_pos.is_valid() {
                    wp.rbrace_pos.next()
                } else {
                    wp.name_range.end
                },
            },
            Word::Command(wc) => wc.range,
            Word::Arithmetic(wa) => wa.range,
            Word::List(wl) => match (wl.children.first(), wl.children.last()) {
                (Some(first), Some(last)) => Range {
                    begin: first.range().begin,
                    end: last.range().end,
                },
                _ => Range::default(),
            },
        }
    }
}

impl Command {
    /// Computes the source span of this command.
    ///
    /// Compound commands span their opening and closing keywords (an if
    /// clause spans `if` through `fi`). A simple command spans from its name
    /// or first assignment to the rightmost argument, redirection operand or
    /// assignment value. A function definition spans from its name to the
    /// end of its body.
    #[must_use]
    pub fn range(&self) -> Range {
        match self {
            Command::Simple(sc) => simple_command_range(sc),
            Command::BraceGroup(bg) => Range {
                begin: bg.lbrace_pos,
                end: bg.rbrace_pos.next(),
            },
            Command::Subshell(s) => Range {
                begin: s.lparen_pos,
                end: s.rparen_pos.next(),
            },
            Command::If(ic) => Range {
                begin: ic.if_range.begin,
                end: ic.fi_range.end,
            },
            Command::For(fc) => Range {
                begin: fc.for_range.begin,
                end: fc.done_range.end,
            },
            Command::Loop(lc) => Range {
                begin: lc.while_until_range.begin,
                end: lc.done_range.end,
            },
            Command::Case(cc) => Range {
                begin: cc.case_range.begin,
                end: cc.esac_range.end,
            },
            Command::FunctionDefinition(fd) => Range {
                begin: fd.name_range.begin,
                end: fd.body.range().end,
            },
        }
    }
}

fn simple_command_range(sc: &SimpleCommand) -> Range {
    let mut range = if let Some(name) = &sc.name {
        name.range()
    } else if let Some(first) = sc.assignments.first() {
        Range {
            begin: first.name_range.begin,
            // A placeholder; the loop below extends it to the real end.
            end: first.name_range.begin,
        }
    } else {
        Range::default()
    };

    let trailing = (sc.arguments.iter())
        .chain(sc.io_redirects.iter().map(|redir| &redir.name))
        .map(Word::range)
        .chain(sc.assignments.iter().map(|assign| assign.value.range()));
    for end in trailing.map(|r| r.end) {
        if end.offset > range.end.offset {
            range.end = end;
        }
    }
    range
}
