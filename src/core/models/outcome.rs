//! Assertion outcomes
//!
//! Whether an assertion failing should count as an error also depends on its
//! [`Severity`](super::Severity); not all failures are equal.

use serde::{Deserialize, Serialize};

/// What happened when an assertion was evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The assertion held
    Success,
    /// The assertion was evaluated and did not hold
    Failure,
    /// Evaluating the assertion itself faulted
    InternalError,
    /// The assertion was never run (typically due to a timeout)
    DidNotRun,
}

impl Outcome {
    /// Every outcome, in declaration order
    pub const ALL: [Self; 4] = [Self::Success, Self::Failure, Self::InternalError, Self::DidNotRun];

    /// Map a plain predicate result onto the outcome vocabulary.
    ///
    /// Never produces `InternalError` or `DidNotRun`; callers assign those
    /// explicitly.
    #[must_use]
    pub const fn from_bool(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }

    /// True for `Failure` and `InternalError`.
    ///
    /// `DidNotRun` is not failure-like: whether a skipped assertion is a
    /// problem is decided by the caller.
    #[must_use]
    pub const fn is_failure_like(self) -> bool {
        match self {
            Self::Failure | Self::InternalError => true,
            Self::Success | Self::DidNotRun => false,
        }
    }

    /// True for everything except `Success`
    #[must_use]
    pub const fn is_non_success(self) -> bool {
        !matches!(self, Self::Success)
    }

    /// Run `action` only when this outcome is failure-like
    pub fn on_failure_like<F: FnOnce()>(self, action: F) {
        if self.is_failure_like() {
            action();
        }
    }
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        Self::from_bool(success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
            Self::InternalError => write!(f, "InternalError"),
            Self::DidNotRun => write!(f, "DidNotRun"),
        }
    }
}
