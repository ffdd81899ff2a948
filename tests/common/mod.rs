//! Shared helpers for integration tests.
//!
//! - `cmd`: a `charboard` command isolated from the caller's environment
//! - `log_capture`: in-memory tracing capture for log assertions
//! - `logger`: per-test phase logging

pub mod cmd;
pub mod log_capture;
pub mod logger;
