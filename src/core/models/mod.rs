//! Domain models for assertion outcomes
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Outcome`] - What happened when an assertion ran
//! - [`Severity`] - How much a failing assertion matters
//! - [`Evidence`] - The observed value or captured fault
//! - [`AssertionResult`] - An outcome, a severity, a message and evidence

mod assertion_result;
mod evidence;
mod outcome;
mod severity;

pub use assertion_result::{AssertionResult, AssertionResultBuilder, ResultError};
pub use evidence::{CapturedFault, Evidence};
pub use outcome::Outcome;
pub use severity::Severity;
