//! Failure severity levels
//!
//! Defines how much a failing assertion should matter to the overall run.
//! The result model carries a severity but never interprets it.

use serde::{Deserialize, Serialize};

/// Failure severity levels, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - reported but never fails a run
    Info,
    /// Warning - reported prominently
    Warning,
    /// Bad - a real problem with the service under test
    #[default]
    Bad,
    /// Fatal - nothing after this can be trusted
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "Info"),
            Self::Warning => write!(f, "Warning"),
            Self::Bad => write!(f, "Bad"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "bad" => Ok(Self::Bad),
            "fatal" => Ok(Self::Fatal),
            _ => Err(format!("Invalid severity: {s}. Use: info, warning, bad, fatal")),
        }
    }
}
