// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recursive descent parser reading exactly one form (an atom or a
//! list) from a [Cursor](../cursor/struct.Cursor.html). Tokenizing
//! and tree building happen in the same pass; the call stack is the
//! parse stack.
//!
//! Quoted atoms escape with a backslash, but only ever the single
//! following character: `\n` is the letter `n`, `\"` a quote, `\\` a
//! backslash. There are no other escape sequences.

use crate::pos::{Pos, Span};
use crate::cursor::Cursor;
use crate::settings::Settings;
use crate::value::Node;
use kstring::KString;
use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("\"")]
    ExpectedClosingQuote,
    #[error(")")]
    ExpectedClosingParen,
    // There's no delimiter to name, the location says it all.
    #[error("")]
    NothingToParse,
    #[error("nesting too deep")]
    NestingTooDeep,
    #[error("IO error ({0})")]
    IOError(anyhow::Error),
}

/// The delimiter that was missing when the input ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Quote,
    CloseParen,
    Nothing,
}

impl Expected {
    pub fn token(self) -> &'static str {
        match self {
            Expected::Quote => "\"",
            Expected::CloseParen => ")",
            Expected::Nothing => "",
        }
    }
}

#[derive(Error, Debug)]
#[error("parse error at {pos}: {err}")]
pub struct ParseErrorWithPos {
    pub err: ParseError,
    pub pos: Pos
}

impl ParseError {
    pub fn at(self, p: Pos) -> ParseErrorWithPos {
        ParseErrorWithPos {
            err: self,
            pos: p
        }
    }
}

impl ParseErrorWithPos {
    pub fn expected(&self) -> Expected {
        match self.err {
            ParseError::ExpectedClosingQuote => Expected::Quote,
            ParseError::ExpectedClosingParen => Expected::CloseParen,
            _ => Expected::Nothing,
        }
    }
}

fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_bare_atom_char(c: char) -> bool {
    ! is_whitespace_char(c) && ! matches!(c, '(' | ')' | ';' | '\0')
}

fn skip_whitespace<I>(cs: &mut Cursor<I>) -> Result<(), ParseErrorWithPos>
    where I: Iterator<Item = anyhow::Result<char>>
{
    while let Some(c) = cs.peek()? {
        if ! is_whitespace_char(c) {
            break;
        }
        cs.read()?;
    }
    Ok(())
}

/// Returns `Ok(None)` if there's no form at the current position
/// (end of input, or a character that can't start one).
fn parse_form<I>(
    cs: &mut Cursor<I>,
    depth_fuel: u32,
) -> Result<Option<Node>, ParseErrorWithPos>
    where I: Iterator<Item = anyhow::Result<char>>
{
    skip_whitespace(cs)?;
    match cs.peek()? {
        Some('"') => Ok(Some(parse_quoted_atom(cs)?)),
        Some('(') => Ok(Some(parse_list(cs, depth_fuel)?)),
        _ => parse_bare_atom(cs),
    }
}

fn parse_bare_atom<I>(
    cs: &mut Cursor<I>,
) -> Result<Option<Node>, ParseErrorWithPos>
    where I: Iterator<Item = anyhow::Result<char>>
{
    let start = cs.pos();
    let mut text = String::new();
    while let Some(c) = cs.peek()? {
        if ! is_bare_atom_char(c) {
            break;
        }
        cs.read()?;
        text.push(c);
    }
    if text.is_empty() {
        return Ok(None)
    }
    Ok(Some(Node::Atom {
        text: KString::from_string(text),
        span: Span { start, end: cs.pos() },
    }))
}

fn parse_quoted_atom<I>(
    cs: &mut Cursor<I>,
) -> Result<Node, ParseErrorWithPos>
    where I: Iterator<Item = anyhow::Result<char>>
{
    let start = cs.pos();
    cs.read()?; // the opening '"'
    let mut text = String::new();
    loop {
        match cs.read()? {
            Some('"') => break,
            Some('\\') => {
                if let Some(c) = cs.read()? {
                    text.push(c);
                } else {
                    return Err(ParseError::ExpectedClosingQuote.at(cs.pos()))
                }
            }
            Some(c) => text.push(c),
            None => return Err(ParseError::ExpectedClosingQuote.at(cs.pos())),
        }
    }
    Ok(Node::Atom {
        text: KString::from_string(text),
        span: Span { start, end: cs.pos() },
    })
}

fn parse_list<I>(
    cs: &mut Cursor<I>,
    depth_fuel: u32,
) -> Result<Node, ParseErrorWithPos>
    where I: Iterator<Item = anyhow::Result<char>>
{
    let start = cs.pos();
    if depth_fuel == 0 {
        return Err(ParseError::NestingTooDeep.at(start))
    }
    cs.read()?; // the opening '('
    let mut children = Vec::new();
    loop {
        skip_whitespace(cs)?;
        match cs.peek()? {
            Some(')') => break,
            None => return Err(ParseError::ExpectedClosingParen.at(cs.pos())),
            Some(c) => {
                if let Some(node) = parse_form(cs, depth_fuel - 1)? {
                    children.push(node);
                } else {
                    // Only ';' and '\0' get here; drop them, or we'd
                    // never move on.
                    debug!("dropping {:?} in list at {}", c, cs.pos());
                    cs.read()?;
                }
            }
        }
    }
    cs.read()?; // the closing ')'
    Ok(Node::List {
        children,
        span: Span { start, end: cs.pos() },
    })
}

/// Parse one form and stop; characters after it are left in `cs`.
pub fn parse_one<I>(
    cs: &mut Cursor<I>,
    settings: &Settings,
) -> Result<Node, ParseErrorWithPos>
    where I: Iterator<Item = anyhow::Result<char>>
{
    trace!("parse_one at {}", cs.pos());
    if let Some(node) = parse_form(cs, settings.max_depth)? {
        trace!("parse_one done at {}", cs.pos());
        Ok(node)
    } else {
        Err(ParseError::NothingToParse.at(cs.pos()))
    }
}
