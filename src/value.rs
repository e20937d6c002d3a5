// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tree built by the parser. Each list owns its children; there
//! is no sharing and no cycles.
//!
//! Displaying a [Node](Node) is the serializer: atoms print their
//! text as is (quoting is not remembered), lists print their children
//! separated by single spaces.

use crate::pos::Span;
use std::fmt::Write;
use kstring::KString;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `text` is after escape processing.
    Atom { text: KString, span: Span },
    List { children: Vec<Node>, span: Span },
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Atom { span, .. } | Node::List { span, .. } => *span,
        }
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Node::Atom { text, .. } => Some(text.as_str()),
            Node::List { .. } => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::Atom { .. } => None,
            Node::List { children, .. } => Some(children),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Node::Atom { text, .. } => f.write_str(text.as_str()),
            Node::List { children, .. } => {
                f.write_char('(')?;
                for (i, item) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    std::fmt::Display::fmt(item, f)?;
                }
                f.write_char(')')
            }
        }
    }
}

pub fn render(node: &Node) -> String {
    node.to_string()
}

/// Easily create an atom
pub fn atom(s: &str, span: Span) -> Node {
    Node::Atom { text: KString::from_ref(s), span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Pos;

    const SPAN: Span = Span { start: Pos::START, end: Pos::START };

    #[test]
    fn render_atoms_verbatim() {
        assert_eq!(render(&atom("he said \"hi\"", SPAN)), "he said \"hi\"");
        assert_eq!(render(&atom("", SPAN)), "");
    }

    #[test]
    fn render_lists() {
        let inner = Node::List {
            children: vec![atom("b", SPAN), atom("c", SPAN)],
            span: SPAN,
        };
        let outer = Node::List {
            children: vec![atom("a", SPAN), inner, atom("d", SPAN)],
            span: SPAN,
        };
        assert_eq!(render(&outer), "(a (b c) d)");
        assert_eq!(render(&Node::List { children: vec![], span: SPAN }), "()");
    }
}
