// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Eq;

/// Both line and col are 1-based; col counts characters, not bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl Pos {
    pub const START: Pos = Pos { line: 1, col: 1 };

    /// The position after consuming `c` at `self`.
    pub fn advance(self, c: char) -> Pos {
        if c == '\n' {
            Pos { line: self.line + 1, col: 1 }
        } else {
            Pos { line: self.line, col: self.col + 1 }
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("{}:{}", self.line, self.col))
    }
}

/// `start` is the position before the first character of a node,
/// `end` the position after its last one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("{}-{}", self.start, self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance() {
        let p = Pos::START.advance('a').advance('\t');
        assert_eq!(p, Pos { line: 1, col: 3 });
        let p = p.advance('\n');
        assert_eq!(p, Pos { line: 2, col: 1 });
        assert_eq!(p.advance('\r'), Pos { line: 2, col: 2 });
    }

    #[test]
    fn display() {
        let span = Span { start: Pos::START, end: Pos { line: 3, col: 7 } };
        assert_eq!(format!("{}", span.end), "3:7");
        assert_eq!(format!("{}", span), "1:1-3:7");
    }
}
