//! Trace loading and replay tests.
