//! Single-byte reader with one byte of pushback.

use crate::{lexer::LexError, source::ByteSource};

/// Reads a [`ByteSource`] one byte at a time.
///
/// The most recently read byte can be returned to the stream with
/// [`push_back`](Self::push_back), at most once per successful
/// [`next_byte`](Self::next_byte).
#[derive(Debug)]
pub struct ByteCursor<S> {
    source: S,
    /// Byte returned by the next `next_byte` before touching the source.
    pending: Option<u8>,
    /// Byte eligible for pushback; cleared once used or after any failure.
    last: Option<u8>,
    offset: usize,
}

impl<S: ByteSource> ByteCursor<S> {
    /// Wraps `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: None,
            last: None,
            offset: 0,
        }
    }

    /// Returns the next unread byte.
    ///
    /// # Errors
    ///
    /// [`LexError::EndOfInput`] once the source is exhausted,
    /// [`LexError::EmptyRead`] if the source breaks its read contract, or
    /// [`LexError::Source`] if the source fails.
    pub fn next_byte(&mut self) -> Result<u8, LexError> {
        if let Some(b) = self.pending.take() {
            self.last = Some(b);
            self.offset += 1;
            return Ok(b);
        }

        let mut buf = [0u8; 1];
        match self.fill(&mut buf) {
            Ok(()) => {
                self.last = Some(buf[0]);
                Ok(buf[0])
            }
            Err(err) => {
                self.last = None;
                Err(err)
            }
        }
    }

    /// Returns the byte from the last [`next_byte`](Self::next_byte) to the
    /// stream.
    ///
    /// # Errors
    ///
    /// [`LexError::InvalidPushback`] if nothing was read since the previous
    /// pushback, or the last read did not succeed.
    pub fn push_back(&mut self) -> Result<(), LexError> {
        let b = self.last.take().ok_or(LexError::InvalidPushback)?;
        self.pending = Some(b);
        self.offset -= 1;
        Ok(())
    }

    /// Fills `buf` completely, starting with a pushed-back byte if there is
    /// one. Pushback is not possible afterwards.
    ///
    /// # Errors
    ///
    /// Same as [`next_byte`](Self::next_byte); end of input before `buf` is
    /// full is reported as [`LexError::EndOfInput`].
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), LexError> {
        self.last = None;
        let mut start = 0;
        if let (Some(b), Some(slot)) = (self.pending, buf.first_mut()) {
            *slot = b;
            self.pending = None;
            self.offset += 1;
            start = 1;
        }
        self.fill(&mut buf[start..])
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Retries short reads until `buf` is full.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), LexError> {
        let mut read = 0;
        while read < buf.len() {
            match self.source.read(&mut buf[read..])? {
                0 => return Err(LexError::EmptyRead),
                n => {
                    read += n;
                    self.offset += n;
                }
            }
        }
        Ok(())
    }
}
