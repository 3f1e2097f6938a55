//! A self-contained JSON document engine.
//!
//! The pipeline is deliberately simple: a single-pass lexer turns the source
//! buffer into a token sequence, a recursive-descent parser turns tokens
//! into a [`Value`] tree, and two purpose-built containers back that tree —
//! an open-addressing hash table ([`ObjectTable`]) for objects and an
//! insertion-ordered list ([`ArrayList`]) for arrays.
//!
//! ```
//! use jsondom::Value;
//!
//! let doc = jsondom::parse(r#"{"name": "widget", "sizes": [1, 2, 3]}"#).unwrap();
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("widget"));
//! assert_eq!(doc.get("sizes").and_then(|s| s.get_index(2)), Some(&Value::Number(3.0)));
//! ```
//!
//! Failures carry the 1-based line number and the verbatim offending line:
//!
//! ```
//! let err = jsondom::parse("{\"a\" 1}").unwrap_err();
//! assert_eq!(err.to_string(), "syntax error: expected ':', found number on line 1: {\"a\" 1}");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod array;
mod error;
mod lexer;
mod parser;
mod table;
mod token;
mod value;

#[cfg(test)]
mod tests;

pub use array::ArrayList;
#[cfg(feature = "std")]
pub use error::LoadError;
pub use error::{CapacityOverflow, ErrorSource, LexError, ParseError, SyntaxError};
pub use parser::{DuplicateKeys, ParserOptions};
pub use table::ObjectTable;
pub use token::TokenKind;
pub use value::Value;

/// Parses one JSON document with default options.
///
/// # Errors
///
/// Any lexical, grammatical, or allocation failure; see [`ErrorSource`].
pub fn parse(source: &str) -> Result<Value, ParseError> {
    parse_with_options(source, ParserOptions::default())
}

/// Parses one JSON document with explicit [`ParserOptions`].
///
/// # Errors
///
/// Any lexical, grammatical, or allocation failure; see [`ErrorSource`].
pub fn parse_with_options(source: &str, options: ParserOptions) -> Result<Value, ParseError> {
    let tokens = lexer::tokenize(source)?;
    parser::Parser::new(source, tokens, options).parse_document()
}

/// Reads the file at `path` into memory and parses it.
///
/// The buffer is acquired in full before parsing begins; open, read, and
/// UTF-8 decoding failures surface as [`LoadError::Io`], never as an empty
/// document.
///
/// # Errors
///
/// [`LoadError::Io`] on filesystem failure, [`LoadError::Parse`] on invalid
/// JSON.
#[cfg(feature = "std")]
pub fn load(path: impl AsRef<std::path::Path>) -> Result<Value, LoadError> {
    let source = std::fs::read_to_string(path)?;
    Ok(parse(&source)?)
}
