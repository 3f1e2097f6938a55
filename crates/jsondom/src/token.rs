//! Classified, positioned slices of source text produced by the lexer.

use alloc::string::{String, ToString};
use core::fmt;

/// The classification of a single token.
///
/// Structural tokens carry no payload of their own; the interesting ones
/// (`String`, `Number`, `Boolean`, `Null`) are resolved against their source
/// span by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A string literal; the token span excludes the surrounding quotes.
    String,
    /// A numeric literal, unconverted at lex time.
    Number,
    /// `{`
    CurlyOpen,
    /// `}`
    CurlyClose,
    /// `[`
    SquareOpen,
    /// `]`
    SquareClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A `true`/`false` keyword candidate (validated by the parser).
    Boolean,
    /// A `null` keyword candidate (validated by the parser).
    Null,
    /// A single whitespace byte, preserved for diagnostics.
    Whitespace,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Number => "number",
            Self::CurlyOpen => "'{'",
            Self::CurlyClose => "'}'",
            Self::SquareOpen => "'['",
            Self::SquareClose => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Whitespace => "whitespace",
        })
    }
}

/// One token: a kind plus byte offsets into the source buffer.
///
/// `start..end` delimit the token text; `line` and `line_start` anchor the
/// token's source line for error formatting. Tokens are never mutated after
/// the lexer emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub line_start: usize,
}

impl Token {
    /// The token's text within `source`.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}

/// The full text of the source line beginning at `line_start`, without its
/// terminator. Used to reproduce the offending line in diagnostics.
pub(crate) fn line_snippet(source: &str, line_start: usize) -> String {
    let rest = &source[line_start..];
    let end = rest.find('\n').unwrap_or(rest.len());
    rest[..end].trim_end_matches('\r').to_string()
}
