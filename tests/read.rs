use simplejson::{json, parse, ParseError, Value, MAX_DEPTH};

const TESTJSON: &str = r#"{
    "abc": "123",
    "age": 18,
    "list": [
        1,
        {
            "name": "YJSNP",
            "nationality": "Japanese",
            "party info": {
                "party name": "black tea",
                "lucky numbers": [114514, 1919810]
            }
        },
        3,
        4,
        5
    ],
    "empty obj": {},
    "empty list": [],
    "flag": true,
    "nothing": null
}"#;

#[test]
fn parses_nested_document() {
    let have = parse(TESTJSON).unwrap();
    let want = json!({
        "abc": "123",
        "age": 18,
        "list": [
            1,
            {
                "name": "YJSNP",
                "nationality": "Japanese",
                "party info": {
                    "party name": "black tea",
                    "lucky numbers": [114514, 1919810]
                }
            },
            3, 4, 5
        ],
        "empty obj": {},
        "empty list": [],
        "flag": true,
        "nothing": null
    });
    assert_eq!(have, want);
    assert_eq!(have["list"][1]["name"].as_str(), Some("YJSNP"));
    assert_eq!(
        have["list"][1]["party info"]["lucky numbers"][0].as_f64(),
        Some(114514.0)
    );
    assert!(have["list"][9].is_null());
    assert!(have["no such key"].is_null());
    assert_eq!(have.get("age").and_then(Value::as_f64), Some(18.0));
    assert_eq!(have.get("missing"), None);
    assert_eq!(json!([1]).get("x"), None);
}

#[test]
fn parses_empty_containers() {
    assert_eq!(parse("{}").unwrap(), json!({}));
    assert_eq!(parse("[]").unwrap(), json!([]));
    assert_eq!(parse("{ }").unwrap(), json!({}));
    assert_eq!(parse("[\n]").unwrap(), json!([]));
}

#[test]
fn parses_object_with_array_value() {
    let v = parse(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
    assert_eq!(v, json!({"a": 1, "b": [1, 2, 3]}));
}

#[test]
fn parses_reserved_words() {
    let v = parse(r#"{"x": null, "y": true, "z": false}"#).unwrap();
    assert_eq!(v, json!({"x": null, "y": true, "z": false}));
    assert!(v["x"].is_null());
    assert_eq!(v["y"].as_bool(), Some(true));
    assert_eq!(v["z"].as_bool(), Some(false));
}

#[test]
fn parses_scalar_roots() {
    assert_eq!(parse("null").unwrap(), json!(null));
    assert_eq!(parse("true").unwrap(), json!(true));
    assert_eq!(parse("123").unwrap(), json!(123));
    assert_eq!(parse("-123.456").unwrap(), json!(-123.456));
    assert_eq!(parse(r#""hello""#).unwrap(), json!("hello"));
    assert_eq!("  null  ".parse::<Value>().unwrap(), json!(null));
}

#[test]
fn duplicate_key_last_write_wins() {
    let v = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(v, json!({"a": 2}));

    // The overwritten key keeps its original slot.
    let v = parse(r#"{"a":1,"c":2,"a":3}"#).unwrap();
    let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "c"]);
    assert_eq!(v["a"].as_f64(), Some(3.0));
}

#[test]
fn insertion_order_is_preserved() {
    let v = parse(r#"{"zz": 1, "aa": 2, "mm": 3}"#).unwrap();
    let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["zz", "aa", "mm"]);
}

#[test]
fn missing_value_fails_at_closing_brace() {
    assert_eq!(
        parse(r#"{"a":}"#).unwrap_err(),
        ParseError::InvalidValue {
            found: '}',
            position: 5
        }
    );
}

#[test]
fn trailing_comma_is_rejected() {
    assert_eq!(
        parse("[1,2,]").unwrap_err(),
        ParseError::InvalidValue {
            found: ']',
            position: 5
        }
    );
    assert!(parse(r#"{"a":1,}"#).is_err());
}

#[test]
fn nesting_past_the_guard_fails_cleanly() {
    let deep = "[".repeat(MAX_DEPTH + 72);
    assert!(matches!(
        parse(&deep).unwrap_err(),
        ParseError::NestingTooDeep { .. }
    ));

    // Exactly at the limit still parses.
    let at_limit = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
    assert!(parse(&at_limit).is_ok());
}

#[test]
fn backslashes_are_verbatim_string_content() {
    let v = parse(r#"{"path": "C:\dir\file"}"#).unwrap();
    assert_eq!(v["path"].as_str(), Some(r"C:\dir\file"));
}

#[test]
fn quote_after_backslash_still_ends_the_string() {
    // No escape interpretation: the second quote terminates the string and
    // everything after it is trailing text.
    let v = parse(r#""ab\"cd""#).unwrap();
    assert_eq!(v, json!(r"ab\"));
}

#[test]
fn whitespace_after_opening_quote_is_consumed() {
    let v = parse(r#"{"msg": "  hi  "}"#).unwrap();
    assert_eq!(v["msg"].as_str(), Some("hi  "));

    let v = parse(r#"{"  name": 1}"#).unwrap();
    assert_eq!(v, json!({"name": 1}));
}

#[test]
fn unterminated_string_reports_end_of_input() {
    assert_eq!(
        parse(r#"{"a": "oops"#).unwrap_err(),
        ParseError::UnexpectedEndOfInput { position: 11 }
    );
}

#[test]
fn empty_key_is_rejected() {
    assert_eq!(
        parse(r#"{"": 1}"#).unwrap_err(),
        ParseError::EmptyToken { position: 2 }
    );
}

#[test]
fn key_with_illegal_character_fails_at_the_character() {
    assert_eq!(
        parse(r#"{"a-b": 1}"#).unwrap_err(),
        ParseError::Mismatch {
            expected: '"',
            found: '-',
            position: 3
        }
    );
}

#[test]
fn unquoted_key_fails_at_the_brace_rule() {
    assert_eq!(
        parse("{1: 2}").unwrap_err(),
        ParseError::Mismatch {
            expected: '}',
            found: '1',
            position: 1
        }
    );
}

#[test]
fn malformed_number_reports_its_start() {
    assert_eq!(
        parse(r#"{"a": 1.2.3}"#).unwrap_err(),
        ParseError::MalformedNumber { position: 6 }
    );
    assert!(parse("1-2").is_err());
    assert!(parse("-").is_err());
}

#[test]
fn misspelled_reserved_words_fail() {
    assert_eq!(
        parse("[nil]").unwrap_err(),
        ParseError::InvalidReservedWord {
            expected: "null",
            position: 1
        }
    );
    assert_eq!(
        parse(r#"{"a": frue}"#).unwrap_err(),
        ParseError::InvalidReservedWord {
            expected: "false",
            position: 6
        }
    );
}

#[test]
fn unknown_value_start_is_invalid() {
    assert_eq!(
        parse("@list").unwrap_err(),
        ParseError::InvalidValue {
            found: '@',
            position: 0
        }
    );
}

#[test]
fn empty_input_is_end_of_input() {
    assert_eq!(
        parse("").unwrap_err(),
        ParseError::UnexpectedEndOfInput { position: 0 }
    );
    assert_eq!(
        parse("   ").unwrap_err(),
        ParseError::UnexpectedEndOfInput { position: 3 }
    );
}

#[test]
fn space_before_comma_after_number_is_rejected() {
    // The number rule leaves trailing whitespace unconsumed, so the list
    // tail sees the space and falls through to the closing bracket.
    assert_eq!(
        parse("[1 , 2]").unwrap_err(),
        ParseError::Mismatch {
            expected: ']',
            found: ',',
            position: 3
        }
    );
    // After a string the closing-quote match consumes the whitespace.
    assert_eq!(parse(r#"["a" , "b"]"#).unwrap(), json!(["a", "b"]));
}

#[test]
fn carriage_return_is_not_insignificant() {
    assert_eq!(
        parse("{\r}").unwrap_err(),
        ParseError::Mismatch {
            expected: '}',
            found: '\r',
            position: 1
        }
    );
}

#[test]
fn trailing_text_after_root_is_ignored() {
    assert_eq!(parse("{} tail").unwrap(), json!({}));
    assert_eq!(parse("42 as well").unwrap(), json!(42));
}

#[test]
fn non_ascii_string_values_pass_through() {
    let v = parse(r#"{"city": "深圳市", "emoji": "💩"}"#).unwrap();
    assert_eq!(v["city"].as_str(), Some("深圳市"));
    assert_eq!(v["emoji"].as_str(), Some("💩"));
}

#[test]
fn errors_format_with_offsets() {
    let err = parse(r#"{"a":}"#).unwrap_err();
    assert_eq!(err.to_string(), "no value can start with '}' at offset 5");
    let err = parse("").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of input at offset 0");
}
