// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use onesexpr::read::{read_file, read_one, write_one};
use onesexpr::settings::{Settings, DEFAULT_SETTINGS};
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Result;


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print a tree describing the parsed one, with positions
    #[clap(long, value_parser)]
    dump: bool,
    /// How many lists may be nested inside each other
    #[clap(long, value_parser, default_value_t = DEFAULT_SETTINGS.max_depth)]
    max_depth: u32,
    /// Exit with status 0 even if parsing failed
    #[clap(long, value_parser)]
    always_exit_zero: bool,
    /// Path to the input file (default: standard input)
    #[clap(value_parser)]
    input_path: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args = Args::parse();
    let settings = Settings { max_depth: args.max_depth };

    let result = if let Some(path) = &args.input_path {
        read_file(path, &settings).map_err(anyhow::Error::from)
    } else {
        read_one(stdin(), &settings).map_err(anyhow::Error::from)
    };

    match result {
        Ok(node) => {
            let out = stdout();
            let mut out = BufWriter::new(out.lock());
            if args.dump {
                write_one(&mut out, &node.dump())?;
            } else {
                write_one(&mut out, &node)?;
            }
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            if args.always_exit_zero {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
