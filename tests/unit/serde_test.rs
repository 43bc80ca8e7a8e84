//! Tests for result serialization
//!
//! Only `outcome`, `severity`, `message` and `actualValue` are written;
//! the derived `is_ok` flag never is.

use http_harness::{AssertionResult, CapturedFault, Evidence, Outcome, Severity};

use crate::common::make_result;

#[test]
fn serializes_only_canonical_fields() {
    let result = make_result(Outcome::Failure, Severity::Fatal, "mismatch", "42");
    let json = serde_json::to_value(&result).unwrap();

    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    let mut expected: Vec<_> = AssertionResult::CANONICAL_FIELDS.iter().map(ToString::to_string).collect();
    expected.sort();
    assert_eq!(keys, expected);
    assert!(json.get("isOk").is_none());
}

#[test]
fn serialized_shape() {
    let result =
        AssertionResult::new(Outcome::InternalError, Severity::Bad, "m", Some(Evidence::of(&7u8)));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["outcome"], "internal_error");
    assert_eq!(json["severity"], "bad");
    assert_eq!(json["message"], "m");
    assert_eq!(json["actualValue"]["kind"], "value");
    assert_eq!(json["actualValue"]["text"], "7");
    assert_eq!(json["actualValue"]["type_name"], "u8");
}

#[test]
fn absent_value_serializes_as_null() {
    let json = serde_json::to_value(AssertionResult::did_not_run(Severity::Info, "skipped")).unwrap();
    assert!(json["actualValue"].is_null());
}

#[test]
fn round_trip_preserves_equality() {
    let results = vec![
        make_result(Outcome::Success, Severity::Info, "ok", "200"),
        AssertionResult::did_not_run(Severity::Fatal, "timed out"),
        AssertionResult::internal_error(
            Severity::Bad,
            "parse",
            CapturedFault::new("unexpected eof").with_backtrace("0: parse"),
        ),
    ];
    for result in results {
        let json = serde_json::to_string(&result).unwrap();
        let back: AssertionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

#[test]
fn deserialize_ignores_is_ok() {
    let json = r#"{
        "outcome": "failure",
        "severity": "warning",
        "message": "header missing",
        "actualValue": null,
        "isOk": true
    }"#;
    let result: AssertionResult = serde_json::from_str(json).unwrap();
    assert!(!result.is_ok());
}

#[test]
fn deserialize_missing_required_field_is_invalid_argument() {
    let json = r#"{ "outcome": "success", "message": "ok" }"#;
    let err = serde_json::from_str::<AssertionResult>(json).unwrap_err();
    assert!(err.to_string().contains("invalid argument: severity must be present"));

    let json = r#"{ "outcome": null, "severity": "bad", "message": "ok" }"#;
    let err = serde_json::from_str::<AssertionResult>(json).unwrap_err();
    assert!(err.to_string().contains("outcome must be present"));
}

#[test]
fn deserialize_without_actual_value() {
    let json = r#"{ "outcome": "did_not_run", "severity": "fatal", "message": "" }"#;
    let result: AssertionResult = serde_json::from_str(json).unwrap();
    assert_eq!(result, AssertionResult::did_not_run(Severity::Fatal, ""));
}
