// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reads exactly one S-expression (an atom or a parenthesized list of
//! forms) from a character stream and builds a tree from it, or
//! reports where and why it failed.
//!
//! * Atoms are either bare runs of characters other than whitespace,
//!   `(`, `)`, `;` and NUL, or quoted with `"`. Inside quotes a
//!   backslash escapes just the next character, whatever it is.
//!
//! * Every node carries the span of its source text, with 1-based
//!   lines and columns.
//!
//! * Errors are precise: the first structural failure (a missing
//!   closing `"` or `)` at end of input) is reported with its
//!   position, nothing else. There is no partial result.
//!
//! * Only the first form is read; whatever follows it in the input is
//!   left alone. There are no comments, numbers or other typed atoms.
//!
//! Use [read::read_one](read/fn.read_one.html) or
//! [read::read_str](read/fn.read_str.html) for the common cases, and
//! [parse::parse_one](parse/fn.parse_one.html) on a
//! [cursor::Cursor](cursor/struct.Cursor.html) to keep reading from
//! the same stream afterwards.

pub mod buffered_chars;
pub mod cursor;
pub mod debug;
pub mod parse;
pub mod pos;
pub mod read;
pub mod settings;
pub mod value;
