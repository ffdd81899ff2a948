//! charboard - character usage dashboard
//!
//! Renders character quota cards, usage leaderboards, a daily trend and
//! period summary as terminal text, JSON, Markdown, a standalone HTML page,
//! an HTTP endpoint or a full-screen TUI.

#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod rich;
pub mod storage;
pub mod tui;
pub mod util;

/// Factories and assertions shared with the integration tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{DashboardError, ExitCode, Result};
