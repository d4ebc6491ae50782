use core::fmt;

use thiserror::Error;

use crate::{
    lexer::LexError,
    token::{Token, TokenKind},
};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token kind, from [`TokenCursor::expect`](crate::TokenCursor::expect).
    Kind(TokenKind),
    /// Any token that starts a value.
    Value,
    /// An object member name followed by `:`.
    Key,
    /// `,` or `}` after an object member.
    ObjectSeparator,
    /// `,`, `]` or the next array element.
    ArrayItem,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => kind.fmt(f),
            Self::Value => f.write_str("valid JSON value"),
            Self::Key => f.write_str("key"),
            Self::ObjectSeparator => f.write_str("',' or '}'"),
            Self::ArrayItem => f.write_str("array element or ']'"),
        }
    }
}

/// Errors raised while building a value tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The lexer failed.
    #[error("lexer error: {0}")]
    Lex(#[from] LexError),
    /// A token of the wrong kind.
    #[error("unexpected token at {index} (expected: {expected}, got: {found})")]
    UnexpectedToken {
        /// Offset of the mismatch within the window checked by
        /// [`TokenCursor::expect`](crate::TokenCursor::expect). Single-token
        /// checks, such as [`Expected::Value`], always report `0`.
        index: usize,
        /// What would have been accepted.
        expected: Expected,
        /// The token actually found.
        found: Token,
    },
    /// Input ended in the middle of a value.
    #[error("unexpected end of input (expected: {expected})")]
    UnexpectedEof {
        /// What was needed next.
        expected: Expected,
    },
    /// Objects and arrays nest deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting exceeds {limit} levels")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl ParseError {
    /// Turns a bare end-of-input from the lexer into
    /// [`ParseError::UnexpectedEof`] naming what was needed.
    pub(crate) fn expecting(self, expected: Expected) -> Self {
        match self {
            Self::Lex(LexError::EndOfInput) => Self::UnexpectedEof { expected },
            other => other,
        }
    }

    pub(crate) fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Lex(LexError::EndOfInput))
    }
}
