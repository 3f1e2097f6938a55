#![allow(clippy::float_cmp)]

use alloc::string::ToString;

use crate::{
    DuplicateKeys, ErrorSource, ParserOptions, SyntaxError, TokenKind, Value, parse,
    parse_with_options,
};

#[test]
fn empty_object_and_array() {
    let object = parse("{}").unwrap();
    assert!(object.is_object());
    assert_eq!(object.as_object().unwrap().len(), 0);

    let array = parse("[]").unwrap();
    assert!(array.is_array());
    assert!(array.as_array().unwrap().is_empty());
}

#[test]
fn scalar_documents() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Boolean(true));
    assert_eq!(parse("false").unwrap(), Value::Boolean(false));
    assert_eq!(parse("0").unwrap(), Value::Number(0.0));
    assert_eq!(parse("-0.5e+10").unwrap(), Value::Number(-0.5e10));
    assert_eq!(parse("\"hi\"").unwrap(), Value::String("hi".to_string()));
}

#[test]
fn nested_document() {
    let doc = parse(
        r#"
        {
            "name": "widget",
            "tags": ["a", "b"],
            "nested": { "ok": true, "none": null },
            "count": 3
        }
        "#,
    )
    .unwrap();

    assert_eq!(doc.get("name"), Some(&Value::from("widget")));
    assert_eq!(
        doc.get("tags").and_then(|t| t.get_index(1)),
        Some(&Value::from("b"))
    );
    assert_eq!(
        doc.get("nested").and_then(|n| n.get("ok")),
        Some(&Value::Boolean(true))
    );
    assert_eq!(doc.get("count"), Some(&Value::Number(3.0)));
}

#[test]
fn duplicate_keys_first_wins_by_default() {
    let doc = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(doc.as_object().unwrap().len(), 1);
    assert_eq!(doc.get("a"), Some(&Value::Number(1.0)));
}

#[test]
fn duplicate_keys_last_wins_option() {
    let options = ParserOptions {
        duplicate_keys: DuplicateKeys::LastWins,
        ..Default::default()
    };
    let doc = parse_with_options(r#"{"a":1,"a":2}"#, options).unwrap();
    assert_eq!(doc.get("a"), Some(&Value::Number(2.0)));
}

#[test]
fn duplicate_keys_reject_option() {
    let options = ParserOptions {
        duplicate_keys: DuplicateKeys::Reject,
        ..Default::default()
    };
    let err = parse_with_options(r#"{"a":1,"a":2}"#, options).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::DuplicateKey("a".to_string()))
    );
}

#[test]
fn missing_colon_names_the_expected_and_found_kinds() {
    let err = parse(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedToken {
            expected: "':'",
            found: TokenKind::Number,
        })
    );
    assert_eq!(err.line(), 1);
    assert_eq!(err.snippet(), r#"{"a" 1}"#);
}

#[test]
fn non_string_key_is_rejected() {
    let err = parse("{1: 2}").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedToken {
            expected: "a string key",
            found: TokenKind::Number,
        })
    );
}

#[test]
fn missing_separator_in_array() {
    let err = parse("[1 2]").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedToken {
            expected: "',' or ']'",
            found: TokenKind::Number,
        })
    );
}

#[test]
fn missing_separator_in_object() {
    let err = parse(r#"{"a": 1 "b": 2}"#).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedToken {
            expected: "',' or '}'",
            found: TokenKind::String,
        })
    );
}

#[test]
fn truncated_documents_report_end_of_input() {
    let err = parse("").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedEndOfInput("a value"))
    );

    let err = parse("{").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedEndOfInput("a string key"))
    );

    let err = parse(r#"{"a":"#).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedEndOfInput("a value"))
    );
}

#[test]
fn trailing_content_is_rejected() {
    let err = parse("{} []").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::UnexpectedToken {
            expected: "end of input",
            found: TokenKind::SquareOpen,
        })
    );
}

#[test]
fn malformed_literals() {
    for (source, literal) in [("nope", "nope"), ("tru", "tru"), ("falsy", "falsy")] {
        let err = parse(source).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorSource::Syntax(SyntaxError::InvalidLiteral(literal.to_string())),
            "{source}"
        );
    }
}

#[test]
fn bare_minus_is_an_invalid_number() {
    let err = parse("-").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::InvalidNumber("-".to_string()))
    );
}

#[test]
fn error_line_numbers_are_one_based() {
    let err = parse("{\n  \"a\": 1,\n  \"b\" 2\n}").unwrap_err();
    assert_eq!(err.line(), 3);
    assert_eq!(err.snippet(), "  \"b\" 2");
}

#[test]
fn default_depth_limit_cuts_off_runaway_nesting() {
    let source = "[".repeat(200);
    let err = parse(&source).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::DepthLimitExceeded(128))
    );
}

#[test]
fn custom_depth_limit() {
    let options = ParserOptions {
        max_depth: 4,
        ..Default::default()
    };
    assert!(parse_with_options("[[[[0]]]]", options).is_ok());
    let err = parse_with_options("[[[[[0]]]]]", options).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorSource::Syntax(SyntaxError::DepthLimitExceeded(4))
    );
}

#[test]
fn string_escapes_pass_through_undecoded() {
    let doc = parse(r#""line\nbreak""#).unwrap();
    assert_eq!(doc.as_str(), Some(r"line\nbreak"));
}

#[test]
fn object_keys_keep_their_source_form() {
    let doc = parse(r#"{"tab\tkey": 1}"#).unwrap();
    assert_eq!(doc.get(r"tab\tkey"), Some(&Value::Number(1.0)));
}
