//! charboard - character usage dashboard
//!
//! CLI entry point.

#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use charboard::cli::args::RenderArgs;
use charboard::cli::{Cli, Commands, OutputFormat};
use charboard::core::logging::{self, LogSettings};
use charboard::storage::config::ResolvedConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(&LogSettings::resolve(
        cli.log_level.as_deref(),
        cli.json_output,
        cli.verbose,
    ));

    // Settings for the error path; the resolved ones are not known yet
    let format = cli.cli_format().unwrap_or(OutputFormat::Human);
    let no_color = cli.no_color;
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "{}", e);
            let error_output = charboard::render::error::render_error(&e, format, no_color, pretty);
            eprintln!("{error_output}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> charboard::Result<()> {
    // Init writes the built-in data and must not depend on an existing config
    if let Some(Commands::Init(args)) = &cli.command {
        return charboard::cli::init::execute(args);
    }

    let serve_args = match &cli.command {
        Some(Commands::Serve(args)) => Some(args),
        _ => None,
    };
    let resolved = ResolvedConfig::resolve(&cli, serve_args)?;

    match &cli.command {
        None => charboard::cli::render::execute(&RenderArgs::default(), &resolved),
        Some(Commands::Render(args)) => charboard::cli::render::execute(args, &resolved),
        Some(Commands::Serve(args)) => charboard::cli::serve::execute(args, &resolved).await,
        Some(Commands::Tui(args)) => charboard::cli::tui::execute(args, &resolved),
        Some(Commands::Init(args)) => charboard::cli::init::execute(args),
    }
}
