//! Tui command: interactive terminal dashboard.

use std::io::IsTerminal;

use crate::cli::args::TuiArgs;
use crate::cli::dashboard_options;
use crate::error::{DashboardError, Result};
use crate::storage::config::ResolvedConfig;
use crate::tui::{App, run_dashboard};

/// Execute the tui command.
///
/// # Errors
///
/// Returns an error for an invalid range or source, when stdout is not a
/// terminal, or when drawing fails.
pub fn execute(args: &TuiArgs, resolved: &ResolvedConfig) -> Result<()> {
    let options = dashboard_options(&args.page)?;

    if !std::io::stdout().is_terminal() {
        return Err(DashboardError::Other(anyhow::anyhow!(
            "the tui command needs an interactive terminal; use `charboard render` instead"
        )));
    }

    let app = App::new(&resolved.config, resolved.config_path.clone(), options);
    tracing::debug!(cards = app.dashboard().cards.len(), "Starting TUI");
    run_dashboard(app)
}
