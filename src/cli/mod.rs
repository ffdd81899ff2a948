//! CLI argument parsing and command dispatch.

pub mod args;
pub mod init;
pub mod render;
pub mod serve;
pub mod tui;

pub use args::{Cli, Commands, OutputFormat};

use crate::core::dashboard::DashboardOptions;
use crate::error::Result;
use args::PageArgs;

/// Page state from `--from`, `--to` and `--source`.
///
/// # Errors
///
/// Returns an error for invalid dates, an inverted range or an unknown source.
pub fn dashboard_options(page: &PageArgs) -> Result<DashboardOptions> {
    Ok(DashboardOptions::new(page.date_range()?, page.data_source()?))
}
