//! Builders for hazard unit inputs.
