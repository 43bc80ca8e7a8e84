//! Shared utilities used across the codebase
//!
//! - [`escape`] - Terminal-safe escaping for rendered values

pub mod escape;

pub use escape::escape_for_terminal;
