//! Tests for the debug rendering of results
//!
//! The rendering is for logs and terminals only; these tests check its
//! content, not a stable format.

use http_harness::{AssertionResult, CapturedFault, Evidence, Outcome, Severity};

use crate::common::{RequestFailed, make_result};

#[test]
fn success_has_no_severity_prefix() {
    let result = make_result(Outcome::Success, Severity::Fatal, "status is 200", "ok");
    let rendered = result.to_string();

    assert!(!rendered.contains("Fatal"));
    assert_eq!(rendered, "Success status is 200 (value: 'ok' of type str)");
}

#[test]
fn did_not_run_has_no_severity_prefix() {
    let rendered = AssertionResult::did_not_run(Severity::Fatal, "timed out").to_string();
    assert_eq!(rendered, "DidNotRun timed out (value: 'null' of type null)");
}

#[test]
fn failure_has_severity_prefix_and_type() {
    let result =
        AssertionResult::new(Outcome::Failure, Severity::Fatal, "mismatch", Some(Evidence::of(&42)));
    let rendered = result.to_string();

    assert!(rendered.starts_with("Fatal: "));
    assert!(rendered.contains("mismatch"));
    assert!(rendered.contains("'42'"));
    assert!(rendered.contains("of type i32"));
    assert_eq!(rendered, "Fatal: Failure mismatch (value: '42' of type i32)");
}

#[test]
fn internal_error_has_severity_prefix() {
    let result =
        AssertionResult::internal_error(Severity::Bad, "read body", CapturedFault::new("eof"));
    assert!(result.to_string().starts_with("Bad: InternalError read body"));
}

#[test]
fn fault_renders_with_stack_instead_of_type() {
    let result = AssertionResult::new(
        Outcome::InternalError,
        Severity::Bad,
        "send request",
        Some(Evidence::fault(&RequestFailed::refused())),
    );
    let rendered = result.to_string();

    assert!(rendered.contains("(value: 'request failed' with stack\n"));
    assert!(rendered.contains("Caused by: connection refused"));
    assert!(!rendered.contains(" of type "));
}

#[test]
fn fault_backtrace_is_rendered() {
    let fault = CapturedFault::new("boom").with_backtrace("   0: harness::run");
    let result = AssertionResult::internal_error(Severity::Fatal, "run", fault);
    assert_eq!(
        result.to_string(),
        "Fatal: InternalError run (value: 'boom' with stack\nboom\n   0: harness::run)"
    );
}

#[test]
fn value_text_is_escaped() {
    let result = make_result(Outcome::Failure, Severity::Bad, "body", "line one\nline two \u{e9}");
    let rendered = result.to_string();

    assert!(!rendered.contains('\n'));
    assert!(!rendered.contains('\u{e9}'));
    assert!(rendered.contains("line one\\nline two \\u{e9}"));
}

#[test]
fn owned_string_value_reports_its_type() {
    let body = String::from("{}");
    let result =
        AssertionResult::new(Outcome::Failure, Severity::Bad, "body", Some(Evidence::of(&body)));
    assert!(result.to_string().ends_with("of type alloc::string::String)"));
}
