//! Lexical tokens.

use core::fmt;

use bstr::{BStr, BString};

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// A quoted string.
    Literal,
    /// A number in its raw textual form.
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `:`
    Colon,
    /// `,`
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ObjectOpen => "{",
            Self::ObjectClose => "}",
            Self::ArrayOpen => "[",
            Self::ArrayClose => "]",
            Self::Literal => "LITERAL",
            Self::Number => "NUMBER",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Colon => ":",
            Self::Comma => ",",
        })
    }
}

/// A classified lexeme.
///
/// Only string literals and numbers carry text. String text has its escape
/// markers removed; number text is kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// A quoted string, unescaped.
    Literal(BString),
    /// A number, unevaluated.
    Number(BString),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `:`
    Colon,
    /// `,`
    Comma,
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::ObjectOpen => TokenKind::ObjectOpen,
            Self::ObjectClose => TokenKind::ObjectClose,
            Self::ArrayOpen => TokenKind::ArrayOpen,
            Self::ArrayClose => TokenKind::ArrayClose,
            Self::Literal(_) => TokenKind::Literal,
            Self::Number(_) => TokenKind::Number,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::Null => TokenKind::Null,
            Self::Colon => TokenKind::Colon,
            Self::Comma => TokenKind::Comma,
        }
    }

    /// Returns the text of a literal or number token.
    #[must_use]
    pub fn text(&self) -> Option<&BStr> {
        match self {
            Self::Literal(text) | Self::Number(text) => Some(BStr::new(text)),
            _ => None,
        }
    }

    /// Like [`text`](Self::text), but takes ownership of the payload.
    #[must_use]
    pub fn into_text(self) -> Option<BString> {
        match self {
            Self::Literal(text) | Self::Number(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text().unwrap_or_else(|| BStr::new(""));
        write!(f, "token({}, {})", self.kind(), text)
    }
}
