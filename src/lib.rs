//! http-harness - the outcome model for assertions evaluated during HTTP test runs
//!
//! This library provides the vocabulary a test harness builds on: what happened
//! when an assertion ran, how much a failure should matter, and the evidence
//! observed along the way.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod shared;

pub use crate::core::models::{
    AssertionResult, AssertionResultBuilder, CapturedFault, Evidence, Outcome, ResultError,
    Severity,
};
pub use crate::core::services::{DidNotRunPolicy, GatePolicy, Verdict, evaluate};
