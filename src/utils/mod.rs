//! Utility functions and helpers for the wire2html proxy.
//!
//! - `logging`: Tracing initialization and credential redaction.

pub mod logging;
