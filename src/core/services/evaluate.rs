//! Evaluation service - turns a check run into an assertion result
//!
//! A failing or faulting check never aborts the rest of a run: errors and
//! panics raised by the check are classified as `InternalError` instead of
//! being propagated.

use std::panic::{self, AssertUnwindSafe};

use crate::core::models::{AssertionResult, CapturedFault, Evidence, Outcome, Severity};

/// What a check reports when it runs to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the expectation held
    pub passed: bool,
    /// The value that was observed
    pub actual: Option<Evidence>,
}

impl Verdict {
    /// Create a verdict
    #[must_use]
    pub const fn new(passed: bool, actual: Option<Evidence>) -> Self {
        Self { passed, actual }
    }

    /// A passing verdict with the observed value
    #[must_use]
    pub fn pass<T: std::fmt::Display + ?Sized>(actual: &T) -> Self {
        Self::new(true, Some(Evidence::of(actual)))
    }

    /// A failing verdict with the observed value
    #[must_use]
    pub fn fail<T: std::fmt::Display + ?Sized>(actual: &T) -> Self {
        Self::new(false, Some(Evidence::of(actual)))
    }
}

/// Run a check and classify what happened
///
/// # Arguments
///
/// * `severity` - Severity attached to the result whatever the outcome
/// * `message` - What the check asserts
/// * `check` - The check itself
///
/// # Returns
///
/// - `Success`/`Failure` from the verdict's `passed` flag
/// - `InternalError` with fault evidence if the check errored or panicked
///
/// Never returns `DidNotRun`; that outcome belongs to whoever schedules checks.
pub fn evaluate<F, E>(severity: Severity, message: impl Into<String>, check: F) -> AssertionResult
where
    F: FnOnce() -> Result<Verdict, E>,
    E: Into<anyhow::Error>,
{
    let message = message.into();
    match panic::catch_unwind(AssertUnwindSafe(check)) {
        Ok(Ok(verdict)) => {
            log::debug!("check '{message}' passed={}", verdict.passed);
            let outcome = Outcome::from_bool(verdict.passed);
            AssertionResult::new(outcome, severity, message, verdict.actual)
        },
        Ok(Err(err)) => {
            let err = err.into();
            log::warn!("check '{message}' failed to evaluate: {err:#}");
            AssertionResult::internal_error(severity, message, CapturedFault::from_anyhow(&err))
        },
        Err(payload) => {
            let fault = CapturedFault::from_panic(&*payload);
            log::warn!("check '{message}' panicked: {}", fault.message());
            AssertionResult::internal_error(severity, message, fault)
        },
    }
}
