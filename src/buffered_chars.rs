// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Get characters from anything implementing `Read`, or from a
//! string. Positions are tracked by the consumer
//! ([Cursor](../cursor/struct.Cursor.html)), since only it knows
//! which characters were actually consumed.

use std::io::{self, Read};
use anyhow::{Result, anyhow};
use utf8::BufReadDecoder;
use genawaiter::rc::Gen;


/// Decodes `fh` as UTF-8. A decoding or IO error is yielded once and
/// ends the stream.
pub fn buffered_chars<R>(
    fh: R
) -> impl Iterator<Item=Result<char>>
    where R: Read
{
    Gen::new(|co| async move {
        let mut inp = BufReadDecoder::new(io::BufReader::new(fh));
        while let Some(r) = inp.next_strict() {
            match r {
                Ok(x) => {
                    for c in x.chars() {
                        co.yield_(Ok(c)).await;
                    }
                },
                Err(e) => {
                    co.yield_(Err(anyhow!("buffered_chars: {}", e))).await;
                    return;
                }
            }
        }
    }).into_iter()
}

pub fn str_chars(s: &str) -> impl Iterator<Item=Result<char>> + '_ {
    s.chars().map(Ok::<char, anyhow::Error>)
}
