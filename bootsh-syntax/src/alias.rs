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

//! Aliases recognized while parsing.
//!
//! Alias definitions live in the shell execution environment, not in this
//! crate; the parser only needs to look replacement text up by name. The
//! host supplies an [`AliasResolver`] when constructing a
//! [`Parser`](crate::parser::Parser), typically the environment's alias
//! table. A plain `HashMap<String, String>` works out of the box.
//!
//! While a replacement is being read, the characters it produced are tagged
//! with an [`AliasFrame`] so the parser can tell which aliases are currently
//! being substituted and stop self-referential definitions from recursing
//! forever.

use std::collections::HashMap;
use std::rc::Rc;

/// Source of alias replacement text.
///
/// The parser calls [`lookup`](Self::lookup) with a candidate command word.
/// Returning `Some` replaces the word with the replacement text; returning
/// `None` leaves the word alone.
pub trait AliasResolver {
    /// Looks up the replacement text for an alias name.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl AliasResolver for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<T: AliasResolver + ?Sized> AliasResolver for &T {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}

/// Record of one active alias substitution.
///
/// Characters spliced into the lexer buffer by a substitution carry a
/// reference-counted frame naming the substituted alias. Frames chain
/// through `parent` when a replacement itself triggers further
/// substitution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AliasFrame {
    /// Name of the substituted alias.
    pub name: String,
    /// Frame of the substitution that produced the replaced word, if any.
    pub parent: Option<Rc<AliasFrame>>,
}

impl AliasFrame {
    /// Tests if this frame or any of its ancestors substituted the given
    /// name.
    ///
    /// This check is what bounds alias substitution: a name that is already
    /// being substituted somewhere up the chain is not substituted again, so
    /// mutually recursive definitions like `a -> b`, `b -> a` terminate.
    #[must_use]
    pub fn is_alias_for(&self, name: &str) -> bool {
        self.name == name
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.is_alias_for(name))
    }
}
