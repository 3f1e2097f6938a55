//! Recursive-descent parser from the token sequence to a value tree.
//!
//! One grammar production per method: each call consumes the tokens of a
//! single value and returns the finished node. Whitespace tokens are
//! skipped before every significant token. Every error is fatal to the
//! parse; partially built subtrees are released on the error path, so no
//! partial tree survives a failed parse.

#[cfg(test)]
mod tests;

use alloc::{string::ToString, vec::Vec};

use crate::{
    array::ArrayList,
    error::{ErrorSource, ParseError, SyntaxError},
    table::ObjectTable,
    token::{Token, TokenKind, line_snippet},
    value::Value,
};

/// What to do with a repeated key inside one object.
///
/// The reference behavior for this engine is first-wins: the later value is
/// parsed, then silently dropped. The policy is an explicit option because
/// other reasonable engines differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Keep the first value; later duplicates are dropped.
    #[default]
    FirstWins,
    /// Keep the last value; earlier entries are replaced.
    LastWins,
    /// Fail the parse with [`SyntaxError::DuplicateKey`].
    Reject,
}

/// Parser configuration.
///
/// # Examples
///
/// ```
/// use jsondom::{DuplicateKeys, ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     duplicate_keys: DuplicateKeys::LastWins,
///     ..Default::default()
/// };
/// let doc = parse_with_options(r#"{"a": 1, "a": 2}"#, options).unwrap();
/// assert_eq!(doc.get("a"), Some(&jsondom::Value::Number(2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum container nesting. Parsing (and therefore teardown)
    /// recursion is proportional to nesting depth, so untrusted input is
    /// cut off here instead of risking stack exhaustion.
    pub max_depth: usize,
    /// Policy for repeated object keys.
    pub duplicate_keys: DuplicateKeys,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

pub(crate) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    options: ParserOptions,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>, options: ParserOptions) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            options,
        }
    }

    /// Parses exactly one document: a single root value with nothing but
    /// whitespace after it.
    pub fn parse_document(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value(0)?;
        self.skip_whitespace();
        if let Some(token) = self.peek() {
            return Err(self.error_at(
                &token,
                SyntaxError::UnexpectedToken {
                    expected: "end of input",
                    found: token.kind,
                },
            ));
        }
        Ok(value)
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        let token = self.next_significant("a value")?;
        match token.kind {
            TokenKind::CurlyOpen => self.parse_object(&token, depth),
            TokenKind::SquareOpen => self.parse_array(&token, depth),
            TokenKind::String => Ok(Value::String(token.text(self.source).to_string())),
            TokenKind::Number => {
                let text = token.text(self.source);
                // Standard float parsing over the span; the lexer's greedy
                // scan can still hand over a bare `-`.
                text.parse::<f64>().map(Value::Number).map_err(|_| {
                    self.error_at(&token, SyntaxError::InvalidNumber(text.to_string()))
                })
            }
            TokenKind::Boolean => match token.text(self.source) {
                "true" => Ok(Value::Boolean(true)),
                "false" => Ok(Value::Boolean(false)),
                text => Err(self.error_at(&token, SyntaxError::InvalidLiteral(text.to_string()))),
            },
            TokenKind::Null => match token.text(self.source) {
                "null" => Ok(Value::Null),
                text => Err(self.error_at(&token, SyntaxError::InvalidLiteral(text.to_string()))),
            },
            kind => Err(self.error_at(
                &token,
                SyntaxError::UnexpectedToken {
                    expected: "a value",
                    found: kind,
                },
            )),
        }
    }

    fn parse_object(&mut self, open: &Token, depth: usize) -> Result<Value, ParseError> {
        self.check_depth(open, depth)?;
        let mut table = ObjectTable::new();

        self.skip_whitespace();
        if self.peek().is_some_and(|t| t.kind == TokenKind::CurlyClose) {
            self.pos += 1;
            return Ok(Value::Object(table));
        }

        loop {
            let key_token = self.next_significant("a string key")?;
            if key_token.kind != TokenKind::String {
                return Err(self.error_at(
                    &key_token,
                    SyntaxError::UnexpectedToken {
                        expected: "a string key",
                        found: key_token.kind,
                    },
                ));
            }
            let key = key_token.text(self.source).to_string();

            let colon = self.next_significant("':'")?;
            if colon.kind != TokenKind::Colon {
                return Err(self.error_at(
                    &colon,
                    SyntaxError::UnexpectedToken {
                        expected: "':'",
                        found: colon.kind,
                    },
                ));
            }

            let value = self.parse_value(depth + 1)?;

            let outcome = match self.options.duplicate_keys {
                DuplicateKeys::FirstWins => table.insert_new(key, value),
                DuplicateKeys::LastWins => table.set(key, value),
                DuplicateKeys::Reject => {
                    if table.contains_key(&key) {
                        return Err(self.error_at(&key_token, SyntaxError::DuplicateKey(key)));
                    }
                    table.set(key, value)
                }
            };
            // The only failure is capacity overflow. A displaced or
            // rejected duplicate value comes back as `Ok(Some(_))` and is
            // dropped here.
            outcome.map_err(|overflow| self.error_at(&key_token, overflow))?;

            let sep = self.next_significant("',' or '}'")?;
            match sep.kind {
                TokenKind::Comma => {}
                TokenKind::CurlyClose => return Ok(Value::Object(table)),
                kind => {
                    return Err(self.error_at(
                        &sep,
                        SyntaxError::UnexpectedToken {
                            expected: "',' or '}'",
                            found: kind,
                        },
                    ));
                }
            }
        }
    }

    fn parse_array(&mut self, open: &Token, depth: usize) -> Result<Value, ParseError> {
        self.check_depth(open, depth)?;
        let mut items = ArrayList::new();

        self.skip_whitespace();
        if self.peek().is_some_and(|t| t.kind == TokenKind::SquareClose) {
            self.pos += 1;
            return Ok(Value::Array(items));
        }

        loop {
            let value = self.parse_value(depth + 1)?;
            items.push(value);

            let sep = self.next_significant("',' or ']'")?;
            match sep.kind {
                TokenKind::Comma => {}
                TokenKind::SquareClose => return Ok(Value::Array(items)),
                kind => {
                    return Err(self.error_at(
                        &sep,
                        SyntaxError::UnexpectedToken {
                            expected: "',' or ']'",
                            found: kind,
                        },
                    ));
                }
            }
        }
    }

    fn check_depth(&self, open: &Token, depth: usize) -> Result<(), ParseError> {
        if depth >= self.options.max_depth {
            return Err(self.error_at(
                open,
                SyntaxError::DepthLimitExceeded(self.options.max_depth),
            ));
        }
        Ok(())
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|t| t.kind == TokenKind::Whitespace) {
            self.pos += 1;
        }
    }

    /// The next non-whitespace token, consumed.
    fn next_significant(&mut self, expected: &'static str) -> Result<Token, ParseError> {
        self.skip_whitespace();
        let token = self.peek().ok_or_else(|| self.end_of_input(expected))?;
        self.pos += 1;
        Ok(token)
    }

    fn error_at(&self, token: &Token, cause: impl Into<ErrorSource>) -> ParseError {
        ParseError {
            source: cause.into(),
            line: token.line,
            snippet: line_snippet(self.source, token.line_start),
        }
    }

    fn end_of_input(&self, expected: &'static str) -> ParseError {
        let (line, line_start) = self
            .tokens
            .last()
            .map_or((1, 0), |token| (token.line, token.line_start));
        ParseError {
            source: SyntaxError::UnexpectedEndOfInput(expected).into(),
            line,
            snippet: line_snippet(self.source, line_start),
        }
    }
}
