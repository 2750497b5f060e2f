//! Tests for the structured `{ "error", "code" }` encoding

use std::io;

use statuserr::{DecodeError, NoopCapturer, StackError, StatusError, CODE_KEY, ERROR_KEY};

#[test]
fn test_encode_has_exactly_two_string_fields() {
    let err = StatusError::with_code(404, "missing");
    let encoded = err.encode();
    assert_eq!(encoded.len(), 2);
    assert_eq!(encoded[ERROR_KEY], "missing");
    assert_eq!(encoded[CODE_KEY], "404");
}

#[test]
fn test_code_is_text_for_zero_and_negative() {
    assert_eq!(StatusError::new("plain").encode()[CODE_KEY], "0");
    assert_eq!(StatusError::with_code(-7, "odd").encode()[CODE_KEY], "-7");
}

#[test]
fn test_json_keeps_code_as_string() {
    let err = StatusError::with_code(500, "fetch user: db down");
    let json = err.to_json().expect("serializable");
    assert_eq!(json, r#"{"code":"500","error":"fetch user: db down"}"#);

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert!(value["code"].is_string());
    assert_eq!(value, serde_json::to_value(err.encode()).expect("serializable"));
}

#[test]
fn test_json_reflects_status_changes() {
    let mut err = StatusError::new("timeout");
    err.set_status(504);
    assert_eq!(err.to_json().expect("serializable"), r#"{"code":"504","error":"timeout"}"#);
}

#[test]
fn test_decode_round_trips_fields() {
    let err = StatusError::from_json(r#"{"error":"missing","code":"404"}"#).expect("decodable");
    assert_eq!(err.code(), 404);
    assert_eq!(err.message(), "missing");
}

#[test]
fn test_decode_rejects_numeric_or_garbage_code() {
    assert!(StatusError::from_json(r#"{"error":"missing","code":404}"#).is_err());

    let failure = StatusError::from_json(r#"{"error":"missing","code":"four"}"#)
        .expect_err("code must be an integer");
    assert!(failure.to_string().contains("invalid status code"));
}

#[test]
fn test_decode_error_message() {
    let failure = DecodeError::InvalidCode("four".to_string());
    assert_eq!(failure.to_string(), r#"invalid status code "four""#);
}

#[test]
fn test_stack_error_encodes_as_inner() {
    let cause = io::Error::new(io::ErrorKind::Other, "db down");
    let err = StackError::with_stack_using(&NoopCapturer, "fetch user", 500, Some(&cause))
        .expect("cause present");
    assert_eq!(
        serde_json::to_string(&err).expect("serializable"),
        r#"{"code":"500","error":"fetch user: db down"}"#
    );
}
