use alloc::string::ToString;

use rstest::rstest;

use crate::{ErrorSource, LexError, SyntaxError, TokenKind, parse};

#[rstest]
#[case::first_line("#", 1, '#')]
#[case::third_line("[1,\n2,\n#]", 3, '#')]
#[case::after_document_whitespace("{}\n\n*", 3, '*')]
#[case::multibyte("∂", 1, '∂')]
fn unexpected_characters_carry_positions(
    #[case] source: &str,
    #[case] line: usize,
    #[case] ch: char,
) {
    let err = parse(source).unwrap_err();
    assert_eq!(err.kind(), &ErrorSource::Lex(LexError::UnexpectedCharacter(ch)));
    assert_eq!(err.line(), line);
}

#[rstest]
#[case::object_trailing_comma(r#"{"a":1,}"#, "a string key", TokenKind::CurlyClose)]
#[case::array_trailing_comma("[1,]", "a value", TokenKind::SquareClose)]
#[case::bare_colon(":", "a value", TokenKind::Colon)]
#[case::bare_close("}", "a value", TokenKind::CurlyClose)]
#[case::two_roots("1 2", "end of input", TokenKind::Number)]
fn unexpected_tokens(
    #[case] source: &str,
    #[case] expected: &'static str,
    #[case] found: TokenKind,
) {
    let err = parse(source).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedToken { expected, found })
    );
}

#[test]
fn unterminated_string() {
    let err = parse("[\"abc").unwrap_err();
    assert_eq!(err.kind(), &ErrorSource::Lex(LexError::UnterminatedString));
    assert_eq!(err.line(), 1);
}

#[test]
fn error_display_reproduces_the_offending_line() {
    let err = parse("{\n  \"a\" 1\n}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error: expected ':', found number on line 2:   \"a\" 1"
    );
}

#[test]
fn no_partial_tree_survives_a_failed_parse() {
    // The error path drops the half-built object, its array child, and the
    // already-parsed elements without leaking or panicking.
    let err = parse(r#"{"a": [1, {"b": 2}, 3"#).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedEndOfInput("',' or ']'"))
    );
}
