use crate::{
    lexer::Lexer,
    parser::{Expected, ParseError},
    source::ByteSource,
    token::{Token, TokenKind},
};

/// A read position over the lexer's token sequence.
///
/// The cursor owns its [`Lexer`] and keeps nothing but an index into the
/// lexer's sequence. Reads and lookahead pull new tokens from the lexer only
/// when the requested position has not been lexed yet, so the sequence only
/// grows and the position never moves backwards.
#[derive(Debug)]
pub struct TokenCursor<S> {
    lexer: Lexer<S>,
    pos: usize,
}

impl<S: ByteSource> TokenCursor<S> {
    /// Starts reading at the lexer's first token.
    pub fn new(lexer: Lexer<S>) -> Self {
        Self { lexer, pos: 0 }
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    ///
    /// Any lexer error, including end of input as
    /// [`LexError::EndOfInput`](crate::LexError::EndOfInput). The position
    /// does not move on failure.
    pub fn read(&mut self) -> Result<&Token, ParseError> {
        self.fill(self.pos + 1)?;
        let token = &self.lexer.tokens()[self.pos];
        self.pos += 1;
        Ok(token)
    }

    /// Returns the next `n` tokens without consuming them.
    ///
    /// # Errors
    ///
    /// Any lexer error hit while lexing the window.
    pub fn peek(&mut self, n: usize) -> Result<&[Token], ParseError> {
        self.fill(self.pos + n)?;
        Ok(&self.lexer.tokens()[self.pos..self.pos + n])
    }

    /// Skips `n` tokens. Tokens past the lexed end are skipped once they are
    /// lexed by a later read or peek.
    pub fn discard(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consumes the next tokens if their kinds match `kinds` in order.
    ///
    /// The window grows one token at a time, so a mismatch is reported
    /// without lexing past it.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnexpectedToken`] for the first mismatch, leaving the
    /// position unchanged, or any lexer error hit while looking ahead.
    pub fn expect(&mut self, kinds: &[TokenKind]) -> Result<&[Token], ParseError> {
        for (index, &kind) in kinds.iter().enumerate() {
            let token = &self.peek(index + 1)?[index];
            if token.kind() != kind {
                return Err(ParseError::UnexpectedToken {
                    index,
                    expected: Expected::Kind(kind),
                    found: token.clone(),
                });
            }
        }

        let start = self.pos;
        self.pos += kinds.len();
        Ok(&self.lexer.tokens()[start..self.pos])
    }

    /// Index of the next token to be read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Every token lexed so far, including ones already read.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        self.lexer.tokens()
    }

    /// Lexes until the sequence holds at least `end` tokens.
    fn fill(&mut self, end: usize) -> Result<(), ParseError> {
        let have = self.lexer.tokens().len();
        if have < end {
            tracing::trace!(pos = self.pos, need = end - have, "filling lookahead");
        }
        while self.lexer.tokens().len() < end {
            self.lexer.next_token()?;
        }
        Ok(())
    }
}
