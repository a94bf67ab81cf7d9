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
use bootsh_quote::quoted;
use itertools::Itertools as _;
use std::fmt;
use std::fmt::Write as _;

impl fmt::Display for WordString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.single_quoted {
            if self.str.contains('\'') {
                // Single quotes cannot contain themselves; fall back to the
                // cheapest quoting that can.
                write!(f, "{}", quoted(&self.str))
            } else {
                write!(f, "'{}'", self.str)
            }
        } else {
            f.write_str(&self.str)
        }
    }
}

impl fmt::Display for WordParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParamOp::*;

        let needs_braces = self.op != None
            || self.arg.is_some()
            || self.lbrace_pos.is_valid()
            || self.name.len() > 1 && self.name.starts_with(|c: char| c.is_ascii_digit());
        if !needs_braces {
            return write!(f, "${}", self.name);
        }

        f.write_str("${")?;
        if self.op == LeadingHash {
            f.write_char('#')?;
        }
        f.write_str(&self.name)?;
        if self.colon {
            f.write_char(':')?;
        }
        match self.op {
            None | LeadingHash => (),
            Minus => f.write_char('-')?,
            Equal => f.write_char('=')?,
            Qmark => f.write_char('?')?,
            Plus => f.write_char('+')?,
            Percent => f.write_char('%')?,
            DPercent => f.write_str("%%")?,
            Hash => f.write_char('#')?,
            DHash => f.write_str("##")?,
        }
        if let Some(arg) = &self.arg {
            write!(f, "{arg}")?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for WordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.back_quoted { ("`", "`") } else { ("$(", ")") };
        f.write_str(open)?;
        if let Some(program) = &self.program {
            write!(f, "{program}")?;
        }
        f.write_str(close)
    }
}

impl fmt::Display for WordArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$(({}))", self.body)
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.double_quoted {
            f.write_char('"')?;
        }
        self.children.iter().try_for_each(|child| child.fmt(f))?;
        if self.double_quoted {
            f.write_char('"')?;
        }
        Ok(())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Word::String(ws) => ws.fmt(f),
            Word::Parameter(wp) => wp.fmt(f),
            Word::Command(wc) => wc.fmt(f),
            Word::Arithmetic(wa) => wa.fmt(f),
            Word::List(wl) => wl.fmt(f),
        }
    }
}

impl fmt::Display for IoRedirectOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use IoRedirectOp::*;
        f.write_str(match self {
            Less => "<",
            Great => ">",
            Clobber => ">|",
            DGreat => ">>",
            LessAnd => "<&",
            GreatAnd => ">&",
            LessGreat => "<>",
            DLess => "<<",
            DLessDash => "<<-",
        })
    }
}

/// Writes the operator and operand; here-document contents are omitted.
impl fmt::Display for IoRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(io_number) = self.io_number {
            write!(f, "{io_number}")?;
        }
        write!(f, "{}{}", self.op, self.name)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl fmt::Display for SimpleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assignments = self.assignments.iter().map(|a| a as &dyn fmt::Display);
        let name = self.name.iter().map(|w| w as &dyn fmt::Display);
        let arguments = self.arguments.iter().map(|w| w as &dyn fmt::Display);
        let redirects = self.io_redirects.iter().map(|r| r as &dyn fmt::Display);
        write!(
            f,
            "{}",
            assignments.chain(name).chain(arguments).chain(redirects).format(" ")
        )
    }
}

/// Writes the body command lists separated by single spaces.
///
/// Each list carries its own trailing separator, so the output stays
/// unambiguous before a closing keyword.
fn fmt_body(body: &[CommandList], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", body.iter().format(" "))
}

impl fmt::Display for BraceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        fmt_body(&self.body, f)?;
        f.write_str(" }")
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        fmt_body(&self.body, f)?;
        f.write_char(')')
    }
}

impl fmt::Display for IfClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("if ")?;
        fmt_body(&self.condition, f)?;
        f.write_str(" then ")?;
        fmt_body(&self.body, f)?;

        let mut else_part = self.else_part.as_deref();
        while let Some(command) = else_part {
            match command {
                Command::If(elif) => {
                    f.write_str(" elif ")?;
                    fmt_body(&elif.condition, f)?;
                    f.write_str(" then ")?;
                    fmt_body(&elif.body, f)?;
                    else_part = elif.else_part.as_deref();
                }
                Command::BraceGroup(group) => {
                    f.write_str(" else ")?;
                    fmt_body(&group.body, f)?;
                    else_part = None;
                }
                other => {
                    write!(f, " else {other};")?;
                    else_part = None;
                }
            }
        }

        f.write_str(" fi")
    }
}

impl fmt::Display for ForClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for {}", self.name)?;
        if self.r#in {
            f.write_str(" in")?;
            for word in &self.word_list {
                write!(f, " {word}")?;
            }
            f.write_char(';')?;
        }
        f.write_str(" do ")?;
        fmt_body(&self.body, f)?;
        f.write_str(" done")
    }
}

impl fmt::Display for LoopClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.r#type {
            LoopType::While => "while ",
            LoopType::Until => "until ",
        })?;
        fmt_body(&self.condition, f)?;
        f.write_str(" do ")?;
        fmt_body(&self.body, f)?;
        f.write_str(" done")
    }
}

impl fmt::Display for CaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.patterns.iter().format(" | "))?;
        if !self.body.is_empty() {
            f.write_char(' ')?;
            fmt_body(&self.body, f)?;
        }
        f.write_str(";;")
    }
}

impl fmt::Display for CaseClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case {} in ", self.word)?;
        for item in &self.items {
            write!(f, "{item} ")?;
        }
        f.write_str("esac")
    }
}

impl fmt::Display for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}() {}", self.name, self.body)?;
        self.io_redirects
            .iter()
            .try_for_each(|redir| write!(f, " {redir}"))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Simple(c) => c.fmt(f),
            Command::BraceGroup(c) => c.fmt(f),
            Command::Subshell(c) => c.fmt(f),
            Command::If(c) => c.fmt(f),
            Command::For(c) => c.fmt(f),
            Command::Loop(c) => c.fmt(f),
            Command::Case(c) => c.fmt(f),
            Command::FunctionDefinition(c) => c.fmt(f),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bang {
            f.write_str("! ")?;
        }
        write!(f, "{}", self.commands.iter().format(" | "))
    }
}

impl fmt::Display for BinopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinopType::And => "&&",
            BinopType::Or => "||",
        })
    }
}

impl fmt::Display for Binop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.r#type, self.right)
    }
}

impl fmt::Display for AndOrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AndOrList::Pipeline(pipeline) => pipeline.fmt(f),
            AndOrList::Binop(binop) => binop.fmt(f),
        }
    }
}

impl fmt::Display for CommandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.and_or_list)?;
        f.write_str(if self.ampersand { " &" } else { ";" })
    }
}

/// Writes the command lists separated by spaces.
///
/// The last list's `;` separator is omitted so that typical one-line
/// programs round-trip to themselves.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut lists = self.body.iter().peekable();
        while let Some(list) = lists.next() {
            if !first {
                f.write_char(' ')?;
            }
            first = false;
            if lists.peek().is_none() && !list.ampersand {
                write!(f, "{}", list.and_or_list)?;
            } else {
                write!(f, "{list}")?;
            }
        }
        Ok(())
    }
}
