// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::cursor::Cursor;
use crate::parse::{parse_one, ParseErrorWithPos};
use crate::settings::{Settings, DEFAULT_SETTINGS};
use crate::value::Node;
use crate::buffered_chars::{buffered_chars, str_chars};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::fs::File;
use thiserror::Error;

/// Errors from reading a file, prefixed with its path.
#[derive(Error, Debug)]
pub enum ReadErrorWithLocation {
    #[error("{1:?}: {0}")]
    IO(std::io::Error, PathBuf),
    #[error("{1:?}: {0}")]
    PE(ParseErrorWithPos, PathBuf),
}

/// Read the first form from `fh`; the rest of the input is not
/// looked at.
pub fn read_one(
    fh: impl Read,
    settings: &Settings,
) -> Result<Node, ParseErrorWithPos>
{
    let mut cs = Cursor::new(buffered_chars(fh));
    parse_one(&mut cs, settings)
}

pub fn read_str(s: &str) -> Result<Node, ParseErrorWithPos> {
    let mut cs = Cursor::new(str_chars(s));
    parse_one(&mut cs, &DEFAULT_SETTINGS)
}

pub fn read_file(
    path: &Path,
    settings: &Settings,
) -> Result<Node, ReadErrorWithLocation> {
    let fh = File::open(path)
        .map_err(|e| ReadErrorWithLocation::IO(e, path.to_path_buf()))?;
    read_one(fh, settings)
        .map_err(|e| ReadErrorWithLocation::PE(e, path.to_path_buf()))
}

/// Write `node` in its canonical form, without a trailing newline.
pub fn write_one(
    mut out: impl Write,
    node: &Node,
) -> Result<(), std::io::Error> {
    write!(out, "{}", node)
}
