use alloc::{vec, vec::Vec};

use rstest::rstest;

use super::*;
use crate::LexError;

fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new(input.as_bytes()).parse().map(Root::into_value)
}

fn s(text: &str) -> Value {
    Value::String(text.into())
}

fn n(text: &str) -> Value {
    Value::Number(text.into())
}

fn obj(members: Vec<(&str, Value)>) -> Value {
    Value::Object(members.into_iter().map(|(k, v)| (k.into(), v)).collect())
}

#[test]
fn object_with_nested_array() {
    assert_eq!(
        parse(r#"{"a":1,"b":[true,false,null]}"#).unwrap(),
        obj(vec![
            ("a", n("1")),
            (
                "b",
                Value::Array(vec![Value::Bool(true), Value::Bool(false), Value::Null])
            ),
        ])
    );
}

#[rstest]
#[case(r#""hello""#, s("hello"))]
#[case("42", n("42"))]
#[case("-0.5e3", n("-0.5e3"))]
#[case("true", Value::Bool(true))]
#[case("false", Value::Bool(false))]
#[case("null", Value::Null)]
#[case("  \n\t null \n", Value::Null)]
fn scalar_roots(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn empty_containers() {
    assert_eq!(parse("{}").unwrap(), Value::Object(Vec::new()));
    assert_eq!(parse("[]").unwrap(), Value::Array(Vec::new()));
    assert_eq!(
        parse(r#"{"a":{},"b":[[]]}"#).unwrap(),
        obj(vec![
            ("a", Value::Object(Vec::new())),
            ("b", Value::Array(vec![Value::Array(Vec::new())])),
        ])
    );
}

#[test]
fn member_order_and_duplicates_are_kept() {
    assert_eq!(
        parse(r#"{"z":1,"a":2,"z":3}"#).unwrap(),
        obj(vec![("z", n("1")), ("a", n("2")), ("z", n("3"))])
    );
}

#[test]
fn escaped_member_names() {
    assert_eq!(
        parse(r#"{"a\"b":"c\\d"}"#).unwrap(),
        obj(vec![("a\"b", s("c\\d"))])
    );
}

#[rstest]
#[case("[1 2]", vec![n("1"), n("2")])]
#[case("[1,,2]", vec![n("1"), n("2")])]
#[case("[,1]", vec![n("1")])]
#[case("[1,]", vec![n("1")])]
#[case("[,]", vec![])]
#[case(r#"["a" {} []]"#, vec![s("a"), Value::Object(vec![]), Value::Array(vec![])])]
fn array_commas_are_optional(#[case] input: &str, #[case] items: Vec<Value>) {
    assert_eq!(parse(input).unwrap(), Value::Array(items));
}

#[test]
fn object_commas_are_optional_between_members() {
    assert_eq!(
        parse(r#"{"a":1 "b":2}"#).unwrap(),
        obj(vec![("a", n("1")), ("b", n("2"))])
    );
}

#[test]
fn trailing_comma_in_object_is_rejected() {
    match parse(r#"{"a":1,}"#).unwrap_err() {
        ParseError::UnexpectedToken {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 0);
            assert_eq!(expected, Expected::Kind(TokenKind::Literal));
            assert_eq!(found, Token::ObjectClose);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn member_without_colon_is_rejected() {
    match parse(r#"{"a" 1}"#).unwrap_err() {
        ParseError::UnexpectedToken {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 1);
            assert_eq!(expected, Expected::Kind(TokenKind::Colon));
            assert_eq!(found, Token::Number("1".into()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case("]", Token::ArrayClose)]
#[case("}", Token::ObjectClose)]
#[case(":", Token::Colon)]
#[case(",", Token::Comma)]
#[case(r#"{"a":}"#, Token::ObjectClose)]
#[case("[:]", Token::Colon)]
fn invalid_value_start(#[case] input: &str, #[case] token: Token) {
    match parse(input).unwrap_err() {
        ParseError::UnexpectedToken {
            index,
            expected: Expected::Value,
            found,
        } => {
            assert_eq!(index, 0);
            assert_eq!(found, token);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case("", Expected::Value)]
#[case("   ", Expected::Value)]
#[case("{", Expected::Key)]
#[case(r#"{"a""#, Expected::Key)]
#[case(r#"{"a":"#, Expected::Value)]
#[case(r#"{"a":1"#, Expected::ObjectSeparator)]
#[case("[", Expected::ArrayItem)]
#[case("[1,", Expected::ArrayItem)]
#[case("[[1]", Expected::ArrayItem)]
#[case(r#"["abc"#, Expected::ArrayItem)]
fn truncated_input(#[case] input: &str, #[case] what: Expected) {
    match parse(input).unwrap_err() {
        ParseError::UnexpectedEof { expected } => assert_eq!(expected, what),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case("[1-2]")]
#[case(r#"{"a":tru}"#)]
#[case("[1.2.3]")]
fn lexer_errors_abort_the_parse(#[case] input: &str) {
    assert!(matches!(parse(input), Err(ParseError::Lex(_))));
}

#[test]
fn lexer_error_keeps_its_kind() {
    assert!(matches!(
        parse("[1e2e3]"),
        Err(ParseError::Lex(LexError::InvalidScientificNotation))
    ));
}

#[test]
fn depth_limit() {
    let options = ParserOptions {
        max_depth: Some(2),
        ..Default::default()
    };
    assert!(Parser::with_options(&b"[[1]]"[..], options).parse().is_ok());
    assert!(Parser::with_options(&br#"{"a":[1]}"#[..], options).parse().is_ok());
    assert!(matches!(
        Parser::with_options(&b"[[[1]]]"[..], options).parse(),
        Err(ParseError::DepthLimitExceeded { limit: 2 })
    ));
    assert!(matches!(
        Parser::with_options(&br#"{"a":{"b":{}}}"#[..], options).parse(),
        Err(ParseError::DepthLimitExceeded { limit: 2 })
    ));
}

#[test]
fn parse_stops_after_first_value() {
    let mut parser = Parser::new(&b"[1] [2]"[..]);
    assert_eq!(parser.parse().unwrap().into_value(), Value::Array(vec![n("1")]));
    assert_eq!(parser.position(), 3);
    assert_eq!(parser.tokens().len(), 3);
    assert_eq!(parser.parse().unwrap().into_value(), Value::Array(vec![n("2")]));
    assert!(parser.next_root().unwrap().is_none());
    assert!(matches!(
        parser.parse(),
        Err(ParseError::UnexpectedEof {
            expected: Expected::Value
        })
    ));
}

#[test]
fn iterator_yields_roots_and_fuses_on_error() {
    let mut parser = Parser::new(&b"1 \"two\" ] 3"[..]);
    assert_eq!(parser.next().unwrap().unwrap().into_value(), n("1"));
    assert_eq!(parser.next().unwrap().unwrap().into_value(), s("two"));
    assert!(parser.next().unwrap().is_err());
    assert!(parser.next().is_none());
}

#[test]
fn lookahead_stays_bounded() {
    let mut parser = Parser::new(&br#"{"a":1} trailing garbage"#[..]);
    parser.parse().unwrap();
    // `{ "a" : 1 }` plus nothing beyond the closing brace.
    assert_eq!(parser.tokens().len(), 5);
}

#[test]
fn error_messages() {
    use alloc::string::ToString;

    assert_eq!(
        parse("]").unwrap_err().to_string(),
        "unexpected token at 0 (expected: valid JSON value, got: token(], ))"
    );
    assert_eq!(
        parse(r#"{"a":1"#).unwrap_err().to_string(),
        "unexpected end of input (expected: ',' or '}')"
    );
    assert_eq!(
        parse("[1-2]").unwrap_err().to_string(),
        "lexer error: invalid number"
    );
}
