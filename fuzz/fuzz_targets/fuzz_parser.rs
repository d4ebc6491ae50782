#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsoncursor::{ByteSource, Parser, ParserOptions, SourceError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    carriage_return_is_whitespace: bool,
    max_depth: Option<u8>,
    chunk: u8,
    data: &'a [u8],
}

/// Hands out at most `chunk` bytes per read.
struct Chunked<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl ByteSource for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        let len = buf.len().min(self.chunk);
        let mut head = &self.data[..self.data.len().min(len)];
        let n = head.read(buf)?;
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn run(input: &Input<'_>) {
    let options = ParserOptions {
        carriage_return_is_whitespace: input.carriage_return_is_whitespace,
        // Unbounded nesting would overflow the stack on `[[[[...`.
        max_depth: Some(input.max_depth.map_or(256, usize::from)),
        ..Default::default()
    };

    let mut whole = Parser::with_options(input.data, options);
    let whole_roots: Vec<_> = whole.by_ref().map(Result::ok).collect();
    assert!(whole.position() <= whole.tokens().len());

    let chunked = Chunked {
        data: input.data,
        chunk: usize::from(input.chunk).max(1),
    };
    let chunked_roots: Vec<_> = Parser::with_options(chunked, options)
        .map(Result::ok)
        .collect();

    assert_eq!(whole_roots, chunked_roots);
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary_take_rest(Unstructured::new(data)) {
        run(&input);
    }
});
