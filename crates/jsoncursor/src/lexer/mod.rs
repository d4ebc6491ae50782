//! The lexer: bytes in, tokens out.
//!
//! The lexer owns the [`ByteCursor`] and the token sequence. Every call to
//! [`Lexer::next_token`] classifies one lexeme and appends it to the
//! sequence, which only ever grows; the parser reads it by index.

mod error;

use alloc::vec::Vec;

pub use error::LexError;

use crate::{ByteCursor, ParserOptions, source::ByteSource, token::Token};

const TRUE_TAIL: &[u8; 3] = b"rue";
const FALSE_TAIL: &[u8; 4] = b"alse";
const NULL_TAIL: &[u8; 3] = b"ull";

/// Turns a [`ByteSource`] into [`Token`]s.
///
/// # Accepted grammar
///
/// - Whitespace is space, tab and line feed (plus carriage return when
///   [`ParserOptions::carriage_return_is_whitespace`] is set).
/// - Strings run to the next unescaped `"`. A backslash copies the byte after
///   it verbatim, so `\"` yields `"` and `\n` yields `n`; escape codes are not
///   interpreted and bytes are not checked for UTF-8.
/// - Numbers start with a digit or `-` and continue over digits, at most one
///   `.` (never after the exponent) and at most one `e`. Any other `-` is an
///   error. The text is stored as written: `-`, `1.`, `-.5` and `1e` are all
///   accepted. End of input ends a number like any other delimiter.
/// - `true`, `false` and `null` must match exactly.
///
/// # Examples
///
/// ```rust
/// use jsoncursor::{Lexer, Token};
///
/// let mut lexer = Lexer::new(&br#"{"n": 5.80975e3}"#[..]);
/// let tokens: Result<Vec<_>, _> = lexer.by_ref().collect();
/// assert_eq!(
///     tokens.unwrap(),
///     vec![
///         Token::ObjectOpen,
///         Token::Literal("n".into()),
///         Token::Colon,
///         Token::Number("5.80975e3".into()),
///         Token::ObjectClose,
///     ]
/// );
/// assert_eq!(lexer.tokens().len(), 5);
/// ```
#[derive(Debug)]
pub struct Lexer<S> {
    bytes: ByteCursor<S>,
    tokens: Vec<Token>,
    options: ParserOptions,
    done: bool,
}

impl<S: ByteSource> Lexer<S> {
    /// Creates a lexer with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    /// Creates a lexer with the given options.
    pub fn with_options(source: S, options: ParserOptions) -> Self {
        Self {
            bytes: ByteCursor::new(source),
            tokens: Vec::with_capacity(options.token_capacity),
            options,
            done: false,
        }
    }

    /// Lexes one token, appends it to the sequence and returns it.
    ///
    /// # Errors
    ///
    /// [`LexError::EndOfInput`] when no token remains (including inside an
    /// unterminated string), or the lexical error that stopped the scan.
    pub fn next_token(&mut self) -> Result<&Token, LexError> {
        let token = self.lex()?;
        tracing::trace!(%token, offset = self.bytes.offset(), "lexed");
        let idx = self.tokens.len();
        self.tokens.push(token);
        Ok(&self.tokens[idx])
    }

    /// Every token produced so far, oldest first.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of source bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.bytes.offset()
    }

    fn lex(&mut self) -> Result<Token, LexError> {
        match self.skip_whitespace()? {
            b'{' => Ok(Token::ObjectOpen),
            b'}' => Ok(Token::ObjectClose),
            b'[' => Ok(Token::ArrayOpen),
            b']' => Ok(Token::ArrayClose),
            b':' => Ok(Token::Colon),
            b',' => Ok(Token::Comma),
            b'"' => self.string(),
            first @ (b'0'..=b'9' | b'-') => self.number(first),
            b't' => self.keyword(TRUE_TAIL, Token::True),
            b'f' => self.keyword(FALSE_TAIL, Token::False),
            b'n' => self.keyword(NULL_TAIL, Token::Null),
            _ => Err(LexError::UnknownIdentifier),
        }
    }

    fn is_whitespace(&self, b: u8) -> bool {
        match b {
            b' ' | b'\t' | b'\n' => true,
            b'\r' => self.options.carriage_return_is_whitespace,
            _ => false,
        }
    }

    fn skip_whitespace(&mut self) -> Result<u8, LexError> {
        loop {
            let b = self.bytes.next_byte()?;
            if !self.is_whitespace(b) {
                return Ok(b);
            }
        }
    }

    fn string(&mut self) -> Result<Token, LexError> {
        let mut text = Vec::with_capacity(12);
        loop {
            match self.bytes.next_byte()? {
                b'"' => return Ok(Token::Literal(text.into())),
                b'\\' => text.push(self.bytes.next_byte()?),
                b => text.push(b),
            }
        }
    }

    fn number(&mut self, first: u8) -> Result<Token, LexError> {
        let mut text = Vec::with_capacity(10);
        text.push(first);

        let mut decimal = false;
        let mut exponent = false;
        loop {
            let b = match self.bytes.next_byte() {
                Ok(b) => b,
                Err(LexError::EndOfInput) => break,
                Err(err) => return Err(err),
            };
            match b {
                b'0'..=b'9' => text.push(b),
                b'-' => return Err(LexError::InvalidNumber),
                b'.' if decimal => return Err(LexError::TooManyDecimals),
                b'.' if exponent => return Err(LexError::InvalidScientificNotation),
                b'.' => {
                    decimal = true;
                    text.push(b);
                }
                b'e' if exponent => return Err(LexError::InvalidScientificNotation),
                b'e' => {
                    exponent = true;
                    text.push(b);
                }
                _ => {
                    self.bytes.push_back()?;
                    break;
                }
            }
        }
        Ok(Token::Number(text.into()))
    }

    /// Matches the rest of a keyword whose first byte was already read.
    fn keyword<const N: usize>(&mut self, tail: &[u8; N], token: Token) -> Result<Token, LexError> {
        let mut buf = [0u8; N];
        match self.bytes.read_exact(&mut buf) {
            Ok(()) if &buf == tail => Ok(token),
            _ => Err(LexError::UnknownIdentifier),
        }
    }
}

impl<S: ByteSource> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    /// Yields tokens until end of input. Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) => Some(Ok(token.clone())),
            Err(LexError::EndOfInput) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
