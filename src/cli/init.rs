//! Init command: write the built-in dashboard data as an editable config.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::InitArgs;
use crate::error::{DashboardError, Result};
use crate::storage::config::Config;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error when the target exists and `--force` is not set, or when
/// the file cannot be written.
pub fn execute(args: &InitArgs) -> Result<()> {
    let config = Config::default();

    if args.print {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(config.to_toml()?.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let path: PathBuf = args.path.clone().unwrap_or_else(Config::config_path);
    if path.exists() && !args.force {
        return Err(DashboardError::ConfigInvalid {
            key: "path".to_string(),
            value: path.display().to_string(),
            message: "file already exists (use --force to overwrite)".to_string(),
        });
    }

    config.save_to(&path)?;
    tracing::info!(path = %path.display(), "Wrote config");
    println!("Wrote {}", path.display());
    Ok(())
}
