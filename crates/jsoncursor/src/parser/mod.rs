//! Recursive-descent tree builder.
//!
//! The parser pulls tokens through a [`TokenCursor`] and never looks more
//! than two tokens ahead. Commas are separators the parser consumes when it
//! sees them, not tokens it demands: `[1 2]` and `{"a":1 "b":2}` parse as if
//! the commas were there, while a comma directly before `}` is still
//! rejected because another member name is required after it.

mod cursor;
mod error;
#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use cursor::TokenCursor;
pub use error::{Expected, ParseError};

use crate::{
    ParserOptions,
    lexer::Lexer,
    source::ByteSource,
    token::{Token, TokenKind},
    value::{Root, Value},
};

/// Builds [`Value`] trees from a [`ByteSource`].
///
/// # Examples
///
/// ```rust
/// use jsoncursor::{Parser, Value};
///
/// let mut parser = Parser::new(&br#"{"a":1,"b":[true,false,null]}"#[..]);
/// let root = parser.parse().unwrap();
/// assert_eq!(root.value().get("a"), Some(&Value::Number("1".into())));
/// ```
///
/// Concatenated documents can be read one after another:
///
/// ```rust
/// use jsoncursor::Parser;
///
/// let roots: Result<Vec<_>, _> = Parser::new(&b"1 [2] {}"[..]).collect();
/// assert_eq!(roots.unwrap().len(), 3);
/// ```
#[derive(Debug)]
pub struct Parser<S> {
    cursor: TokenCursor<S>,
    options: ParserOptions,
    failed: bool,
}

impl<S: ByteSource> Parser<S> {
    /// Creates a parser with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    pub fn with_options(source: S, options: ParserOptions) -> Self {
        Self {
            cursor: TokenCursor::new(Lexer::with_options(source, options)),
            options,
            failed: false,
        }
    }

    /// Parses the next document, which must exist.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnexpectedEof`] if the input holds no further value, or
    /// the first error hit while parsing it.
    pub fn parse(&mut self) -> Result<Root, ParseError> {
        self.next_root()?.ok_or(ParseError::UnexpectedEof {
            expected: Expected::Value,
        })
    }

    /// Parses the next document, or returns `None` if only whitespace
    /// remains.
    ///
    /// # Errors
    ///
    /// The first error hit while parsing the document. The parser's state
    /// is unspecified afterwards.
    pub fn next_root(&mut self) -> Result<Option<Root>, ParseError> {
        match self.cursor.peek(1).map(|_| ()) {
            Ok(()) => {}
            Err(err) if err.is_end_of_input() => return Ok(None),
            Err(err) => return Err(self.abort(err)),
        }
        match self.parse_value(0) {
            Ok(value) => Ok(Some(Root::new(value))),
            Err(err) => Err(self.abort(err)),
        }
    }

    /// Every token lexed so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        self.cursor.tokens()
    }

    /// Index of the next unread token.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn abort(&mut self, err: ParseError) -> ParseError {
        tracing::debug!(error = %err, position = self.cursor.position(), "parse aborted");
        self.failed = true;
        err
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        let token = self
            .cursor
            .read()
            .map_err(|e| e.expecting(Expected::Value))?
            .clone();
        match token {
            Token::ObjectOpen => self.parse_object(depth + 1),
            Token::ArrayOpen => self.parse_array(depth + 1),
            Token::Literal(text) => Ok(Value::String(text)),
            Token::Number(text) => Ok(Value::Number(text)),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Null => Ok(Value::Null),
            found @ (Token::ObjectClose | Token::ArrayClose | Token::Colon | Token::Comma) => {
                Err(ParseError::UnexpectedToken {
                    index: 0,
                    expected: Expected::Value,
                    found,
                })
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.enter(depth)?;
        let mut members = Vec::new();
        if self.peek_kind(Expected::Key)? == TokenKind::ObjectClose {
            self.cursor.discard(1);
            return Ok(Value::Object(members));
        }

        loop {
            let name = self
                .cursor
                .expect(&[TokenKind::Literal, TokenKind::Colon])
                .map_err(|e| e.expecting(Expected::Key))?[0]
                .clone()
                .into_text()
                .unwrap_or_default();
            let value = self.parse_value(depth)?;
            members.push((name, value));

            match self.peek_kind(Expected::ObjectSeparator)? {
                TokenKind::Comma => self.cursor.discard(1),
                TokenKind::ObjectClose => {
                    self.cursor.discard(1);
                    return Ok(Value::Object(members));
                }
                // Missing comma; the next member name is checked above.
                _ => {}
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.enter(depth)?;
        let mut items = Vec::new();
        loop {
            match self.peek_kind(Expected::ArrayItem)? {
                TokenKind::Comma => self.cursor.discard(1),
                TokenKind::ArrayClose => {
                    self.cursor.discard(1);
                    return Ok(Value::Array(items));
                }
                _ => items.push(self.parse_value(depth)?),
            }
        }
    }

    fn peek_kind(&mut self, expected: Expected) -> Result<TokenKind, ParseError> {
        let window = self.cursor.peek(1).map_err(|e| e.expecting(expected))?;
        Ok(window[0].kind())
    }

    fn enter(&self, depth: usize) -> Result<(), ParseError> {
        match self.options.max_depth {
            Some(limit) if depth > limit => Err(ParseError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

impl<S: ByteSource> Iterator for Parser<S> {
    type Item = Result<Root, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.next_root().transpose()
    }
}

/// Parses exactly one document from an in-memory buffer. Anything after the
/// first value is left unread.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse_slice(input: &[u8]) -> Result<Root, ParseError> {
    Parser::new(input).parse()
}
