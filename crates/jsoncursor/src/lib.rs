//! A streaming JSON tokenizer with a lazy, lookahead-bounded
//! recursive-descent parser.
//!
//! Bytes flow from a [`ByteSource`] through a [`ByteCursor`] (one byte of
//! pushback) into the [`Lexer`], which appends [`Token`]s to a sequence it
//! owns. The [`Parser`] reads that sequence through a [`TokenCursor`],
//! lexing only as far ahead as it needs, and builds a [`Value`] tree.
//!
//! ```rust
//! use jsoncursor::{Parser, Value};
//!
//! let mut parser = Parser::new(&br#"{"a":1,"b":[true,false,null]}"#[..]);
//! let root = parser.parse().unwrap();
//! assert_eq!(
//!     root.into_value(),
//!     Value::Object(vec![
//!         ("a".into(), Value::Number("1".into())),
//!         (
//!             "b".into(),
//!             Value::Array(vec![Value::Bool(true), Value::Bool(false), Value::Null])
//!         ),
//!     ])
//! );
//! ```
//!
//! The grammar is deliberately loose in places: string escapes are not
//! interpreted, number text is stored unevaluated, and commas between
//! elements are optional. See [`Lexer`] and [`Parser`] for details.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod byte_cursor;
mod lexer;
mod options;
mod parser;
mod source;
mod token;
mod value;


pub use byte_cursor::ByteCursor;
pub use lexer::{LexError, Lexer};
pub use options::ParserOptions;
pub use parser::{Expected, ParseError, Parser, TokenCursor, parse_slice};
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, SourceError};
pub use token::{Token, TokenKind};
pub use value::{Members, Root, Value};
