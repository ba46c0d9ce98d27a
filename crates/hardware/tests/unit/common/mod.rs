//! Common component tests.
//!
//! Register id construction and the error types of the library edges.

/// Unit tests for error display and conversion.
pub mod error;
