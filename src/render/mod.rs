//! Output rendering for human, robot and HTML modes.

pub mod chart;
pub mod error;
pub mod html;
pub mod human;
pub mod labels;
pub mod robot;

use crate::cli::args::OutputFormat;
use crate::core::models::Dashboard;
use crate::error::Result;

pub use chart::{ChartRenderer, HtmlCharts, TerminalCharts};

/// Render the dashboard in the requested format.
pub fn render_dashboard(
    dashboard: &Dashboard,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    tracing::debug!(format = format.as_str(), pretty, no_color, "Rendering dashboard");
    match format {
        OutputFormat::Human => human::render_dashboard(dashboard, no_color),
        OutputFormat::Json => robot::render_dashboard_json(dashboard, pretty),
        OutputFormat::Md => robot::render_dashboard_md(dashboard),
        OutputFormat::Html => html::render_page(dashboard),
    }
}
