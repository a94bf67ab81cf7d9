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

//! Generic traversal over syntax trees.
//!
//! A [`Node`] borrows any of the five node tiers. [`Node::for_each`] walks
//! the borrowed subtree in pre-order, invoking a callback on every node, so
//! analysis passes (say, collecting every command name a menu script can
//! invoke) need no knowledge of the variant structure.

use super::*;

/// Borrowed reference to a node of any tier.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    CommandList(&'a CommandList),
    AndOrList(&'a AndOrList),
    Command(&'a Command),
    Word(&'a Word),
}

impl<'a> Node<'a> {
    /// Walks the subtree rooted at this node in pre-order.
    ///
    /// The callback receives `self` first, then every descendant. Redirect
    /// operands, assignment values, case patterns and filled here-document
    /// lines are all visited.
    pub fn for_each<F: FnMut(Node<'a>)>(self, f: &mut F) {
        f(self);
        match self {
            Node::Program(program) => visit_lists(&program.body, f),
            Node::CommandList(list) => Node::AndOrList(&list.and_or_list).for_each(f),
            Node::AndOrList(AndOrList::Pipeline(pipeline)) => {
                for command in &pipeline.commands {
                    Node::Command(command).for_each(f);
                }
            }
            Node::AndOrList(AndOrList::Binop(binop)) => {
                Node::AndOrList(&binop.left).for_each(f);
                Node::AndOrList(&binop.right).for_each(f);
            }
            Node::Command(command) => visit_command_children(command, f),
            Node::Word(word) => visit_word_children(word, f),
        }
    }
}

fn visit_lists<'a, F: FnMut(Node<'a>)>(lists: &'a [CommandList], f: &mut F) {
    for list in lists {
        Node::CommandList(list).for_each(f);
    }
}

fn visit_words<'a, F: FnMut(Node<'a>)>(words: &'a [Word], f: &mut F) {
    for word in words {
        Node::Word(word).for_each(f);
    }
}

fn visit_redirects<'a, F: FnMut(Node<'a>)>(redirects: &'a [IoRedirect], f: &mut F) {
    for redirect in redirects {
        Node::Word(&redirect.name).for_each(f);
        if let Some(body) = &redirect.here_document {
            visit_words(body.lines(), f);
        }
    }
}

fn visit_command_children<'a, F: FnMut(Node<'a>)>(command: &'a Command, f: &mut F) {
    match command {
        Command::Simple(sc) => {
            if let Some(name) = &sc.name {
                Node::Word(name).for_each(f);
            }
            visit_words(&sc.arguments, f);
            visit_redirects(&sc.io_redirects, f);
            for assignment in &sc.assignments {
                Node::Word(&assignment.value).for_each(f);
            }
        }
        Command::BraceGroup(bg) => visit_lists(&bg.body, f),
        Command::Subshell(s) => visit_lists(&s.body, f),
        Command::If(ic) => {
            visit_lists(&ic.condition, f);
            visit_lists(&ic.body, f);
            if let Some(else_part) = &ic.else_part {
                Node::Command(else_part).for_each(f);
            }
        }
        Command::For(fc) => {
            visit_words(&fc.word_list, f);
            visit_lists(&fc.body, f);
        }
        Command::Loop(lc) => {
            visit_lists(&lc.condition, f);
            visit_lists(&lc.body, f);
        }
        Command::Case(cc) => {
            Node::Word(&cc.word).for_each(f);
            for item in &cc.items {
                visit_words(&item.patterns, f);
                visit_lists(&item.body, f);
            }
        }
        Command::FunctionDefinition(fd) => {
            Node::Command(&fd.body).for_each(f);
            visit_redirects(&fd.io_redirects, f);
        }
    }
}

fn visit_word_children<'a, F: FnMut(Node<'a>)>(word: &'a Word, f: &mut F) {
    match word {
        Word::String(_) => (),
        Word::Parameter(wp) => {
            if let Some(arg) = &wp.arg {
                Node::Word(arg).for_each(f);
            }
        }
        Word::Command(wc) => {
            if let Some(program) = &wc.program {
                Node::Program(program).for_each(f);
            }
        }
        Word::Arithmetic(wa) => Node::Word(&wa.body).for_each(f),
        Word::List(wl) => visit_words(&wl.children, f),
    }
}
