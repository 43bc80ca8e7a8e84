//! Gate policy - decides which results fail a run
//!
//! `AssertionResult::is_ok` says whether an assertion counts against the run.
//! The gate adds the run-level policy on top: which severities are hard
//! errors, and whether assertions that never ran should count at all.

use serde::{Deserialize, Serialize};

use crate::core::models::{AssertionResult, Outcome, Severity};

/// How results for assertions that never ran are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DidNotRunPolicy {
    /// Skipped assertions never fail the run
    #[default]
    Ignore,
    /// Skipped assertions fail the run like any other failure
    Fail,
}

/// Run-level policy applied to individual results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePolicy {
    /// Lowest severity that makes a failing result a hard error
    #[serde(default = "default_fail_at")]
    pub fail_at: Severity,

    /// Treatment of `DidNotRun` results
    #[serde(default)]
    pub did_not_run: DidNotRunPolicy,
}

const fn default_fail_at() -> Severity {
    Severity::Bad
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            fail_at: default_fail_at(),
            did_not_run: DidNotRunPolicy::default(),
        }
    }
}

impl GatePolicy {
    /// Whether this result should fail the run
    #[must_use]
    pub fn is_hard_error(&self, result: &AssertionResult) -> bool {
        let counts = !result.is_ok()
            || (result.outcome() == Outcome::DidNotRun
                && self.did_not_run == DidNotRunPolicy::Fail);
        counts && result.severity() >= self.fail_at
    }

    /// Whether a run with these results passes the gate
    pub fn passes<'a, I>(&self, results: I) -> bool
    where
        I: IntoIterator<Item = &'a AssertionResult>,
    {
        self.hard_errors(results).next().is_none()
    }

    /// The results that fail the run, in input order
    pub fn hard_errors<'a, I>(&self, results: I) -> impl Iterator<Item = &'a AssertionResult>
    where
        I: IntoIterator<Item = &'a AssertionResult>,
    {
        let policy = *self;
        results.into_iter().filter(move |r| policy.is_hard_error(r))
    }
}
