//! Byte sources the lexer can pull from.
//!
//! A [`ByteSource`] hands out raw bytes on request. Unlike
//! [`std::io::Read`], end of input is an explicit condition
//! ([`SourceError::EndOfInput`]) rather than a zero-length read, so a source
//! that returns `Ok(0)` for a non-empty buffer is treated as broken by the
//! [`ByteCursor`](crate::ByteCursor).

use alloc::boxed::Box;
use core::error::Error;

use thiserror::Error;

/// Failure or end-of-input signalled by a [`ByteSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no more bytes.
    #[error("end of input")]
    EndOfInput,
    /// The underlying read failed.
    #[error("read failed: {0}")]
    Failed(#[source] Box<dyn Error + Send + Sync>),
}

/// A pull-based supplier of raw bytes.
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes into `buf` and returns how many were
    /// written.
    ///
    /// Implementations return [`SourceError::EndOfInput`] once exhausted.
    /// Short reads are allowed; the caller retries until satisfied.
    ///
    /// # Errors
    ///
    /// [`SourceError::EndOfInput`] when no bytes remain, or
    /// [`SourceError::Failed`] when the read itself fails.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        (**self).read(buf)
    }
}

impl ByteSource for &[u8] {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        if self.is_empty() {
            return Err(SourceError::EndOfInput);
        }
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

/// Adapts a [`std::io::Read`] into a [`ByteSource`].
///
/// `Ok(0)` from the reader is end of input and interrupted reads are
/// retried. Reading goes one request at a time, so wrap unbuffered readers
/// (files, sockets) in a [`std::io::BufReader`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        loop {
            match self.inner.read(buf) {
                Ok(0) if !buf.is_empty() => return Err(SourceError::EndOfInput),
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => return Err(SourceError::Failed(Box::new(err))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_drains_then_ends() {
        let mut src: &[u8] = b"abc";
        let mut buf = [0u8; 2];
        assert_eq!(src.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"ab");
        assert_eq!(src.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'c');
        assert!(matches!(src.read(&mut buf), Err(SourceError::EndOfInput)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_source_maps_zero_read_to_end_of_input() {
        let mut src = IoSource::new(std::io::Cursor::new(b"x".to_vec()));
        let mut buf = [0u8; 4];
        assert_eq!(src.read(&mut buf).unwrap(), 1);
        assert!(matches!(src.read(&mut buf), Err(SourceError::EndOfInput)));
    }
}
