/// Configuration for the [`Lexer`](crate::Lexer) and
/// [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use jsoncursor::{Parser, ParserOptions};
///
/// let options = ParserOptions {
///     max_depth: Some(64),
///     ..Default::default()
/// };
/// let mut parser = Parser::with_options(&b"[[1]]"[..], options);
/// assert!(parser.parse().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Whether `\r` counts as whitespace between tokens.
    ///
    /// The lexer only skips space, horizontal tab and line feed. Enable this
    /// to accept documents with CRLF line endings.
    ///
    /// # Default
    ///
    /// `false`
    pub carriage_return_is_whitespace: bool,

    /// Maximum nesting depth of objects and arrays.
    ///
    /// The tree builder recurses once per nesting level, so untrusted input
    /// should set a limit. Exceeding it fails with
    /// [`ParseError::DepthLimitExceeded`](crate::ParseError::DepthLimitExceeded).
    ///
    /// # Default
    ///
    /// `None` (unlimited)
    pub max_depth: Option<usize>,

    /// Initial capacity of the token sequence.
    ///
    /// # Default
    ///
    /// `256`
    pub token_capacity: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            carriage_return_is_whitespace: false,
            max_depth: None,
            token_capacity: 256,
        }
    }
}
