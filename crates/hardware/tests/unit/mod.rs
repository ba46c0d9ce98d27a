//! # Unit Components
//!
//! Organizes the unit tests by the crate module they exercise.

/// Unit tests for register ids and error types.
pub mod common;



/// Unit tests for trace loading and replay.
pub mod sim;

/// Unit tests for hazard statistics accounting.
pub mod stats_verification;
