//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`evaluate`](mod@evaluate) - Classify a check run into an assertion result
//! - [`gate`] - Decide which results fail a run

pub mod evaluate;
pub mod gate;

pub use evaluate::{Verdict, evaluate};
pub use gate::{DidNotRunPolicy, GatePolicy};
