//! Error types for lexing, parsing, and container growth.

use alloc::string::String;

use thiserror::Error;

use crate::token::TokenKind;

/// A failed parse: what went wrong, and where.
///
/// Carries the 1-based line number and the verbatim text of the offending
/// source line so callers can surface a useful diagnostic without keeping
/// the source buffer around.
#[derive(Error, Debug, PartialEq)]
#[error("{source} on line {line}: {snippet}")]
pub struct ParseError {
    pub(crate) source: ErrorSource,
    pub(crate) line: usize,
    pub(crate) snippet: String,
}

impl ParseError {
    /// The classified cause of the failure.
    #[must_use]
    pub fn kind(&self) -> &ErrorSource {
        &self.source
    }

    /// 1-based line number of the offending input.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The full text of the offending source line.
    #[must_use]
    pub fn snippet(&self) -> &str {
        &self.snippet
    }
}

/// The broad class of a [`ParseError`].
#[derive(Error, Debug, PartialEq)]
pub enum ErrorSource {
    /// The scanner hit a byte no JSON token can start with.
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    /// The token sequence violated the JSON grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// A container failed to grow.
    #[error("allocation error: {0}")]
    Alloc(#[from] CapacityOverflow),
}

/// Failures produced while tokenizing.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LexError {
    /// A byte that cannot begin any JSON token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// End of input inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Failures produced while parsing the token sequence.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SyntaxError {
    /// A token other than the expected one.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// Human-readable description of the expected token set.
        expected: &'static str,
        /// The kind actually found.
        found: TokenKind,
    },
    /// The token sequence ended mid-production.
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEndOfInput(&'static str),
    /// A number token that standard float parsing rejected.
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
    /// A keyword token whose bytes do not spell `true`, `false`, or `null`.
    #[error("invalid literal '{0}'")]
    InvalidLiteral(String),
    /// A repeated object key under [`DuplicateKeys::Reject`].
    ///
    /// [`DuplicateKeys::Reject`]: crate::DuplicateKeys::Reject
    #[error("duplicate object key \"{0}\"")]
    DuplicateKey(String),
    /// Nesting exceeded [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("maximum nesting depth of {0} exceeded")]
    DepthLimitExceeded(usize),
}

/// Doubling a table's capacity overflowed `usize`.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("container capacity overflowed usize")]
pub struct CapacityOverflow;

/// Failure to load a document from the filesystem.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened, read, or decoded as UTF-8.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file contents were not valid JSON.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
