//! Core domain logic for the harness
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Outcome, Severity, Evidence, `AssertionResult`)
//! - `services/` - Classification of check runs and the gate policy

pub mod models;
pub mod services;
