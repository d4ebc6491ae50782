use thiserror::Error;

use crate::source::SourceError;

/// Errors raised while turning bytes into tokens.
///
/// [`LexError::EndOfInput`] is not a failure: it is how the byte cursor and
/// the lexer say "nothing left". Everything else aborts the current parse.
#[derive(Debug, Error)]
pub enum LexError {
    /// The source is exhausted.
    #[error("end of input")]
    EndOfInput,
    /// The source returned zero bytes without signalling end of input.
    #[error("source returned no bytes and no error")]
    EmptyRead,
    /// Pushback was requested without a directly preceding successful read.
    #[error("pushback must directly follow a successful read")]
    InvalidPushback,
    /// A `-` appeared after the first byte of a number.
    #[error("invalid number")]
    InvalidNumber,
    /// A number contained more than one `.`.
    #[error("invalid number: too many decimals")]
    TooManyDecimals,
    /// A second `e`, or a `.` after the `e`.
    #[error("scientific notation is invalid")]
    InvalidScientificNotation,
    /// A byte that cannot start a token, or a misspelled keyword.
    #[error("unknown identifier")]
    UnknownIdentifier,
    /// The source failed to read.
    #[error("source error: {0}")]
    Source(#[source] SourceError),
}

impl LexError {
    /// Returns `true` for [`LexError::EndOfInput`].
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl From<SourceError> for LexError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::EndOfInput => Self::EndOfInput,
            failed @ SourceError::Failed(_) => Self::Source(failed),
        }
    }
}
