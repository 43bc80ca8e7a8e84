//! Assertion result model
//!
//! The result of running one assertion: an [`Outcome`], a [`Severity`], a
//! human-readable message and the observed [`Evidence`]. Results are
//! immutable once built.
//!
//! # Examples
//!
//! ```
//! use http_harness::{AssertionResult, Evidence, Outcome, Severity};
//!
//! let result = AssertionResult::new(
//!     Outcome::Failure,
//!     Severity::Fatal,
//!     "status mismatch",
//!     Some(Evidence::of(&404)),
//! );
//! assert!(!result.is_ok());
//! assert!(result.to_string().starts_with("Fatal: Failure status mismatch"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CapturedFault, Evidence, Outcome, Severity};
use crate::shared::escape_for_terminal;

/// Errors raised while building a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    /// A required field was not supplied
    #[error("invalid argument: {field} must be present")]
    InvalidArgument {
        /// Name of the missing field
        field: &'static str,
    },
}

/// The result of running one assertion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAssertionResult")]
pub struct AssertionResult {
    outcome: Outcome,
    severity: Severity,
    message: String,
    actual_value: Option<Evidence>,
}

impl AssertionResult {
    /// Fields written by serialization. `is_ok` is derived and never among them.
    pub const CANONICAL_FIELDS: [&'static str; 4] =
        ["outcome", "severity", "message", "actualValue"];

    /// Create a result
    #[must_use]
    pub fn new(
        outcome: Outcome,
        severity: Severity,
        message: impl Into<String>,
        actual_value: Option<Evidence>,
    ) -> Self {
        Self {
            outcome,
            severity,
            message: message.into(),
            actual_value,
        }
    }

    /// Start building a result field by field
    #[must_use]
    pub fn builder() -> AssertionResultBuilder {
        AssertionResultBuilder::default()
    }

    /// Create a `Success` or `Failure` result from a predicate
    #[must_use]
    pub fn from_bool(
        passed: bool,
        severity: Severity,
        message: impl Into<String>,
        actual_value: Option<Evidence>,
    ) -> Self {
        Self::new(Outcome::from_bool(passed), severity, message, actual_value)
    }

    /// Create a result for an assertion that never ran
    #[must_use]
    pub fn did_not_run(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(Outcome::DidNotRun, severity, message, None)
    }

    /// Create a result for an assertion whose evaluation faulted
    #[must_use]
    pub fn internal_error(
        severity: Severity,
        message: impl Into<String>,
        fault: CapturedFault,
    ) -> Self {
        Self::new(Outcome::InternalError, severity, message, Some(Evidence::Fault(fault)))
    }

    /// The human-readable explanation
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// What happened
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// How much a failure of this assertion matters
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// The observed value, if any
    #[must_use]
    pub const fn actual_value(&self) -> Option<&Evidence> {
        self.actual_value.as_ref()
    }

    /// Whether this assertion should not count against the run.
    ///
    /// This is the pass/fail signal for aggregation; do not re-derive it
    /// from [`outcome`](Self::outcome).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        !self.outcome.is_failure_like()
    }
}

impl std::fmt::Display for AssertionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut prefix = None;
        self.outcome.on_failure_like(|| prefix = Some(self.severity));
        if let Some(severity) = prefix {
            write!(f, "{severity}: ")?;
        }

        let text = self.actual_value.as_ref().map_or("null", Evidence::text);
        write!(
            f,
            "{} {} (value: '{}",
            self.outcome,
            self.message,
            escape_for_terminal(text)
        )?;

        match &self.actual_value {
            Some(Evidence::Fault(fault)) => write!(f, "' with stack\n{})", fault.render()),
            Some(Evidence::Value { type_name, .. }) => write!(f, "' of type {type_name})"),
            None => write!(f, "' of type null)"),
        }
    }
}

/// Builder for [`AssertionResult`]; `build` rejects missing required fields
#[derive(Debug, Clone, Default)]
pub struct AssertionResultBuilder {
    outcome: Option<Outcome>,
    severity: Option<Severity>,
    message: Option<String>,
    actual_value: Option<Evidence>,
}

impl AssertionResultBuilder {
    /// Set the outcome (required)
    #[must_use]
    pub fn outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set the severity (required)
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the message (required, may be empty)
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the observed value
    #[must_use]
    pub fn actual_value(mut self, evidence: impl Into<Option<Evidence>>) -> Self {
        self.actual_value = evidence.into();
        self
    }

    /// Build the result
    pub fn build(self) -> Result<AssertionResult, ResultError> {
        let outcome = self.outcome.ok_or(ResultError::InvalidArgument { field: "outcome" })?;
        let severity = self.severity.ok_or(ResultError::InvalidArgument { field: "severity" })?;
        let message = self.message.ok_or(ResultError::InvalidArgument { field: "message" })?;
        Ok(AssertionResult {
            outcome,
            severity,
            message,
            actual_value: self.actual_value,
        })
    }
}

/// Wire form; deserialization is routed through the builder
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssertionResult {
    #[serde(default)]
    outcome: Option<Outcome>,
    #[serde(default)]
    severity: Option<Severity>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    actual_value: Option<Evidence>,
}

impl TryFrom<RawAssertionResult> for AssertionResult {
    type Error = ResultError;

    fn try_from(raw: RawAssertionResult) -> Result<Self, Self::Error> {
        let mut builder = Self::builder().actual_value(raw.actual_value);
        if let Some(outcome) = raw.outcome {
            builder = builder.outcome(outcome);
        }
        if let Some(severity) = raw.severity {
            builder = builder.severity(severity);
        }
        if let Some(message) = raw.message {
            builder = builder.message(message);
        }
        builder.build()
    }
}
