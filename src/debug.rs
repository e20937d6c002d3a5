// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for debugging the onesexpr library

use crate::{value::{Node, atom}, pos::Span};

fn listn(
    symname: &str,
    span: Span,
    items: impl Iterator<Item=Node>,
) -> Node {
    let mut children : Vec<Node> = Vec::new();
    children.push(atom(symname, span));
    children.push(atom(&span.to_string(), span));
    children.extend(items);
    Node::List { children, span }
}

// Whether `s` would read back as exactly this one bare atom.
fn is_plain(s: &str) -> bool {
    ! s.is_empty()
        && ! s.starts_with('"')
        && s.chars().all(|c| ! matches!(c, ' ' | '\t' | '\r' | '\n'
                                        | '(' | ')' | ';' | '\0'))
}

impl Node {
    /// A tree describing this one, spans included.
    pub fn dump(&self) -> Node {
        match self {
            Node::Atom { text, span } => {
                if is_plain(text) {
                    listn("atom", *span,
                          std::iter::once(atom(text, *span)))
                } else {
                    listn("atom-codes", *span,
                          text.chars().map(|c| atom(&(c as u32).to_string(),
                                                    *span)))
                }
            }
            Node::List { children, span } => {
                listn("list", *span, children.iter().map(|v| v.dump()))
            }
        }
    }
}
