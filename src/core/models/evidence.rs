//! Evidence model
//!
//! The actual value observed when an assertion ran. Evidence is tagged at
//! capture time as either a plain value or a captured fault, so rendering
//! never has to guess what kind of thing it holds.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};

use serde::{Deserialize, Serialize};

/// The observed value behind an assertion outcome
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// A plain observed value
    Value {
        /// The value's `Display` form
        text: String,
        /// The value's type name, captured alongside it
        type_name: String,
    },
    /// An error or panic captured while evaluating the assertion
    Fault(CapturedFault),
}

impl Evidence {
    /// Capture a plain value along with its type name
    #[must_use]
    pub fn of<T: std::fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Value {
            text: value.to_string(),
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Capture an error as fault evidence
    #[must_use]
    pub fn fault<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::Fault(CapturedFault::from_error(err))
    }

    /// Short text form: the value text, or the fault message
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Value { text, .. } => text,
            Self::Fault(fault) => fault.message(),
        }
    }

    /// Type name of a plain value; `None` for faults
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Value { type_name, .. } => Some(type_name),
            Self::Fault(_) => None,
        }
    }

    /// The captured fault, if this is one
    #[must_use]
    pub const fn as_fault(&self) -> Option<&CapturedFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            Self::Value { .. } => None,
        }
    }
}

impl From<CapturedFault> for Evidence {
    fn from(fault: CapturedFault) -> Self {
        Self::Fault(fault)
    }
}

/// A fault captured as renderable text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapturedFault {
    message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    chain: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    backtrace: Option<String>,
}

impl CapturedFault {
    /// A fault with only a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            chain: Vec::new(),
            backtrace: None,
        }
    }

    /// Capture an error and its `source()` chain
    #[must_use]
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        Self {
            message: err.to_string(),
            chain,
            backtrace: capture_backtrace(),
        }
    }

    /// Capture an `anyhow::Error` and its context chain
    #[must_use]
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
            chain: err.chain().skip(1).map(ToString::to_string).collect(),
            backtrace: capture_backtrace(),
        }
    }

    /// Capture the payload of a caught panic
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with a non-string payload".to_string());
        Self {
            message: format!("panicked: {message}"),
            chain: Vec::new(),
            backtrace: capture_backtrace(),
        }
    }

    /// Attach a backtrace rendering
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: impl Into<String>) -> Self {
        self.backtrace = Some(backtrace.into());
        self
    }

    /// The top-level error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the underlying causes, outermost first
    #[must_use]
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// The backtrace taken at capture time, when backtraces were enabled
    #[must_use]
    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref()
    }

    /// Full rendering: message, causes, then the backtrace
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.message.clone();
        for cause in &self.chain {
            out.push_str("\nCaused by: ");
            out.push_str(cause);
        }
        if let Some(backtrace) = &self.backtrace {
            out.push('\n');
            out.push_str(backtrace);
        }
        out
    }
}

impl std::fmt::Display for CapturedFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

// Only honored when RUST_BACKTRACE / RUST_LIB_BACKTRACE enable capture.
fn capture_backtrace() -> Option<String> {
    let backtrace = Backtrace::capture();
    (backtrace.status() == BacktraceStatus::Captured).then(|| backtrace.to_string())
}
