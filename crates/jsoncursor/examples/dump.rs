//! Prints the indented tree of every JSON document in a file or on stdin.
//!
//! Run with
//!
//! ```bash
//! echo '{"a":[1,null]} [true]' | cargo run -p jsoncursor --example dump
//! RUST_LOG=jsoncursor=trace cargo run -p jsoncursor --example dump -- doc.json
//! ```
#![allow(missing_docs)]

use std::{
    fs::File,
    io::{self, BufReader, Read},
    process::ExitCode,
};

use jsoncursor::{IoSource, Parser, ParserOptions};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let reader: Box<dyn Read> = match std::env::args_os().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                eprintln!("cannot open {}: {err}", path.to_string_lossy());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let options = ParserOptions {
        carriage_return_is_whitespace: true,
        max_depth: Some(512),
        ..Default::default()
    };
    let parser = Parser::with_options(IoSource::new(BufReader::new(reader)), options);

    for (index, root) in parser.enumerate() {
        match root {
            Ok(root) => println!("# document {index}\n{root}"),
            Err(err) => {
                eprintln!("document {index}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
