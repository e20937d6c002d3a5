// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One character of lookahead over a character source, plus the
//! position of the next unconsumed character.

use crate::pos::Pos;
use crate::parse::{ParseError, ParseErrorWithPos};

pub struct Cursor<I>
    where I: Iterator<Item = anyhow::Result<char>>
{
    cs: I,
    /// `Some(None)` once the end of `cs` was seen; `cs` must not be
    /// polled after that.
    peeked: Option<Option<char>>,
    pos: Pos,
}

impl<I> Cursor<I>
    where I: Iterator<Item = anyhow::Result<char>>
{
    pub fn new(cs: I) -> Self {
        Cursor {
            cs,
            peeked: None,
            pos: Pos::START,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The next character without consuming it, `None` at end of
    /// input.
    pub fn peek(&mut self) -> Result<Option<char>, ParseErrorWithPos> {
        if let Some(mc) = self.peeked {
            return Ok(mc)
        }
        let mc = match self.cs.next() {
            Some(Ok(c)) => Some(c),
            Some(Err(e)) => return Err(ParseError::IOError(e).at(self.pos)),
            None => None,
        };
        self.peeked = Some(mc);
        Ok(mc)
    }

    /// Consume the next character. At end of input, returns `None`
    /// and leaves the position alone.
    pub fn read(&mut self) -> Result<Option<char>, ParseErrorWithPos> {
        let mc = self.peek()?;
        if let Some(c) = mc {
            self.peeked = None;
            self.pos = self.pos.advance(c);
        }
        Ok(mc)
    }

    pub fn at_end(&mut self) -> Result<bool, ParseErrorWithPos> {
        Ok(self.peek()?.is_none())
    }
}
