//! Render command implementation.

use std::io::Write;

use crate::cli::args::RenderArgs;
use crate::cli::dashboard_options;
use crate::core::dashboard::build_dashboard;
use crate::core::provider::StaticDataProvider;
use crate::error::Result;
use crate::render::render_dashboard;
use crate::storage::config::ResolvedConfig;

/// Execute the render command.
///
/// Output goes to `--output` when given (always without ANSI styling),
/// otherwise to stdout.
pub fn execute(args: &RenderArgs, resolved: &ResolvedConfig) -> Result<()> {
    let options = dashboard_options(&args.page)?;
    let provider = StaticDataProvider::from_config(&resolved.config);
    let dashboard = build_dashboard(&provider, &options);

    if dashboard.invalid_card_count() > 0 {
        tracing::warn!(
            invalid = dashboard.invalid_card_count(),
            "Some quota cards could not be formatted"
        );
    }

    let no_color = resolved.no_color || args.output.is_some();
    let rendered = render_dashboard(&dashboard, resolved.format, resolved.pretty, no_color)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, rendered.as_bytes())?;
            tracing::info!(
                path = %path.display(),
                format = resolved.format.as_str(),
                "Wrote dashboard"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}
