//! Single-pass, byte-wise tokenizer.
//!
//! The scanner walks the source buffer once, left to right, with no
//! backtracking. Every byte of input lands in exactly one token, including
//! whitespace, which is emitted as tokens of its own so the parser can skip
//! it without losing the positions needed for diagnostics. Keyword tokens
//! (`true`/`false`/`null`) are cut to a fixed length without validating
//! their bytes; the parser rejects mismatches.

use alloc::vec::Vec;

use crate::{
    error::{ErrorSource, LexError, ParseError},
    token::{Token, TokenKind, line_snippet},
};

/// Tokenizes `source` in one pass.
///
/// On failure no partial token sequence is returned; the error carries the
/// 1-based line number and the verbatim offending line.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).run()
}

struct Lexer<'src> {
    source: &'src str,
    bytes: &'src [u8],
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(&byte) = self.bytes.get(self.pos) {
            let token = match byte {
                b'{' => self.single(TokenKind::CurlyOpen),
                b'}' => self.single(TokenKind::CurlyClose),
                b'[' => self.single(TokenKind::SquareOpen),
                b']' => self.single(TokenKind::SquareClose),
                b':' => self.single(TokenKind::Colon),
                b',' => self.single(TokenKind::Comma),
                b'\n' => {
                    // The newline token still belongs to the line it ends;
                    // the next byte starts a fresh line.
                    let token = self.single(TokenKind::Whitespace);
                    self.line += 1;
                    self.line_start = self.pos;
                    token
                }
                b' ' | b'\t' | b'\r' => self.single(TokenKind::Whitespace),
                b'"' => self.string()?,
                b'-' | b'0'..=b'9' => self.number(),
                b't' => self.keyword(TokenKind::Boolean, 4),
                b'f' => self.keyword(TokenKind::Boolean, 5),
                b'n' => self.keyword(TokenKind::Null, 4),
                _ => return Err(self.unexpected_character()),
            };
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        Token {
            kind,
            start,
            end,
            line: self.line,
            line_start: self.line_start,
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.pos += 1;
        self.token(kind, start, self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Scans a string literal. The returned span excludes both quotes.
    ///
    /// A quote closes the string only when preceded by an even run of
    /// backslashes; counting the whole run (rather than one byte) keeps
    /// `"\\"` and friends classified correctly.
    fn string(&mut self) -> Result<Token, ParseError> {
        let start = self.pos + 1;
        let mut cursor = start;
        let mut backslashes = 0usize;
        loop {
            match self.bytes.get(cursor) {
                None => return Err(self.error_here(LexError::UnterminatedString)),
                Some(b'"') if backslashes % 2 == 0 => break,
                Some(b'\\') => backslashes += 1,
                Some(_) => backslashes = 0,
            }
            cursor += 1;
        }
        self.pos = cursor + 1;
        Ok(self.token(TokenKind::String, start, cursor))
    }

    /// Greedy scan of `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`,
    /// stopping at the first non-conforming byte. No conversion happens
    /// here; a malformed span (e.g. a bare `-`) is caught by the parser.
    fn number(&mut self) -> Token {
        let start = self.pos;
        if self.bytes[self.pos] == b'-' {
            self.pos += 1;
        }
        match self.peek_at(0) {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => {
                self.pos += 1;
                self.digits();
            }
            _ => {}
        }
        // Fraction, only when the dot is actually followed by a digit.
        if self.peek_at(0) == Some(b'.') && self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
            self.digits();
        }
        // Exponent, only when a digit follows the marker and optional sign.
        if matches!(self.peek_at(0), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(self.peek_at(1), Some(b'+' | b'-')));
            if self.peek_at(1 + sign).is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1 + sign;
                self.digits();
            }
        }
        self.token(TokenKind::Number, start, self.pos)
    }

    fn digits(&mut self) {
        while self.peek_at(0).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    /// Cuts a fixed-length keyword candidate without inspecting its bytes.
    fn keyword(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let mut end = usize::min(self.pos + len, self.bytes.len());
        // The fixed-length cut can land inside a multibyte sequence; back
        // up to a boundary so the span stays sliceable. The parser rejects
        // the shortened text.
        while !self.source.is_char_boundary(end) {
            end -= 1;
        }
        self.pos = end;
        self.token(kind, start, end)
    }

    fn unexpected_character(&self) -> ParseError {
        let ch = self.source[self.pos..].chars().next().unwrap_or('\u{FFFD}');
        self.error_here(LexError::UnexpectedCharacter(ch))
    }

    fn error_here(&self, cause: LexError) -> ParseError {
        ParseError {
            source: ErrorSource::Lex(cause),
            line: self.line,
            snippet: line_snippet(self.source, self.line_start),
        }
    }
}
