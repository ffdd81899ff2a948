//! Utility functions.

pub mod env;
pub mod format;
pub mod time;

pub use format::{format_compact, format_percent, format_thousands};
pub use time::{format_relative_time, parse_date};
