//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::models::{DataSource, DateRange};
use crate::error::Result;
use crate::util::time::parse_date;

/// Character usage dashboard - quota cards, leaderboards and trends.
#[derive(Parser, Debug)]
#[command(name = "charboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format [default: human]
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (overrides CHARBOARD_CONFIG)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Output format given on the command line, if any.
    #[must_use]
    pub const fn cli_format(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the dashboard once (default command)
    Render(RenderArgs),

    /// Serve the dashboard page over HTTP
    Serve(ServeArgs),

    /// Full-screen terminal dashboard
    Tui(TuiArgs),

    /// Write the built-in dashboard data as a config file
    Init(InitArgs),
}

/// Page state shared by every command that shows the dashboard.
#[derive(Parser, Debug, Clone, Default)]
pub struct PageArgs {
    /// First day of the trend range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of the trend range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Data source shown in the analysis section (total, year1, year2, self-purchase)
    #[arg(long, value_name = "SOURCE")]
    pub source: Option<String>,
}

impl PageArgs {
    /// Parse `--from`/`--to` into a validated range.
    ///
    /// # Errors
    ///
    /// Returns an error for unparseable dates or `from > to`.
    pub fn date_range(&self) -> Result<DateRange> {
        let start = self
            .from
            .as_deref()
            .map(|value| parse_date("from", value))
            .transpose()?;
        let end = self
            .to
            .as_deref()
            .map(|value| parse_date("to", value))
            .transpose()?;
        DateRange::new(start, end)
    }

    /// Parse `--source`, defaulting to the total.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown source names.
    pub fn data_source(&self) -> Result<DataSource> {
        self.source
            .as_deref()
            .map_or(Ok(DataSource::Total), DataSource::from_arg)
    }
}

/// Arguments for the `render` command.
#[derive(Parser, Debug, Clone, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Write output to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `serve` command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Address to bind [default: 127.0.0.1]
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 8501]
    #[arg(long, short = 'p', value_name = "PORT")]
    pub port: Option<u16>,
}

/// Arguments for the `tui` command.
#[derive(Parser, Debug, Clone, Default)]
pub struct TuiArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Print the default config to stdout instead of writing it
    #[arg(long)]
    pub print: bool,

    /// Write to this path instead of the default config location
    #[arg(long, value_name = "PATH", conflicts_with = "print")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Output format.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable rich output
    #[default]
    Human,
    /// JSON output
    Json,
    /// Markdown output
    Md,
    /// Standalone HTML page
    Html,
}

impl OutputFormat {
    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Md => "md",
            Self::Html => "html",
        }
    }
}
