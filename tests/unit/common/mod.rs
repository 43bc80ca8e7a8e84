//! Shared test fixtures and helpers

use std::hash::{DefaultHasher, Hash, Hasher};

use http_harness::{AssertionResult, Evidence, Outcome, Severity};

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a result with a plain string value
pub fn make_result(outcome: Outcome, severity: Severity, message: &str, actual: &str) -> AssertionResult {
    AssertionResult::new(outcome, severity, message, Some(Evidence::of(actual)))
}

/// Hash a value with the standard hasher
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// An error with a source, for fault capture tests
#[derive(Debug, thiserror::Error)]
#[error("request failed")]
pub struct RequestFailed {
    #[source]
    pub cause: std::io::Error,
}

impl RequestFailed {
    pub fn refused() -> Self {
        Self {
            cause: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        }
    }
}
