//! Configuration file loading and management.
//!
//! The config file holds both the dashboard data (page text, quota records,
//! leaderboards, trend) and output/server settings. It lives at:
//! - Linux: `~/.config/charboard/config.toml`
//! - macOS: `~/Library/Application Support/tw.lab32.charboard/config.toml`
//! - Windows: `%APPDATA%\lab32\charboard\config\config.toml`
//!
//! A missing file means the built-in sample dashboard.
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `CHARBOARD_CONFIG`: Override config file path
//! - `CHARBOARD_FORMAT`: Output format (human, json, md, html)
//! - `CHARBOARD_NO_COLOR` or `NO_COLOR`: Disable colors (1, true, yes)
//! - `CHARBOARD_PRETTY`: Pretty-print JSON output (1, true, yes)
//! - `CHARBOARD_PORT`: Port for `charboard serve`

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::{Cli, OutputFormat, ServeArgs};
use crate::core::models::{LeaderboardEntry, NamedQuota, OrgInfo, TrendPoint};
use crate::core::provider::{
    BUILTIN_ANALYSIS, BUILTIN_SUBTITLE, BUILTIN_TITLE, BUILTIN_TREND_NAME, builtin_bots,
    builtin_quotas, builtin_trend_points, builtin_users,
};
use crate::error::{DashboardError, Result};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "CHARBOARD_CONFIG";
/// Environment variable for output format.
pub const ENV_FORMAT: &str = "CHARBOARD_FORMAT";
/// Environment variable to disable colors.
pub const ENV_NO_COLOR: &str = "CHARBOARD_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "CHARBOARD_PRETTY";
/// Environment variable for the server port.
pub const ENV_PORT: &str = "CHARBOARD_PORT";

/// Default bind address for `charboard serve`.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port for `charboard serve`.
pub const DEFAULT_PORT: u16 = 8501;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Dashboard data and file-level settings.
    pub config: Config,
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to disable colored output.
    pub no_color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
    /// Bind address for the HTTP server.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub config_path: ConfigSource,
    pub format: ConfigSource,
    pub no_color: ConfigSource,
    pub pretty: ConfigSource,
    pub host: ConfigSource,
    pub port: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, environment variables, and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly requested config file does not exist
    /// - The config file exists but is invalid
    /// - Any resolved value is invalid (e.g., unknown format, port 0)
    pub fn resolve(cli: &Cli, serve_args: Option<&ServeArgs>) -> Result<Self> {
        let mut sources = ConfigSources::default();

        let (config, config_path) = Self::load_config(cli, &mut sources.config_path)?;
        config.validate()?;

        let format = Self::resolve_format(cli, &config, &mut sources.format)?;
        let no_color = Self::resolve_no_color(cli, &config, &mut sources.no_color);
        let pretty = Self::resolve_pretty(cli, &config, &mut sources.pretty);
        let host = Self::resolve_host(serve_args, &config, &mut sources.host);
        let port = Self::resolve_port(serve_args, &config, &mut sources.port)?;

        tracing::debug!(
            ?config_path,
            format = format.as_str(),
            format_source = %sources.format,
            no_color,
            pretty,
            "Resolved configuration"
        );

        Ok(Self {
            config,
            config_path,
            format,
            no_color,
            pretty,
            host,
            port,
            sources,
        })
    }

    /// Load the config file: `--config`, then `CHARBOARD_CONFIG`, then the
    /// platform default. Explicit paths must exist.
    fn load_config(cli: &Cli, source: &mut ConfigSource) -> Result<(Config, Option<PathBuf>)> {
        if let Some(path) = &cli.config {
            *source = ConfigSource::Cli;
            return Ok((Config::load_required(path)?, Some(path.clone())));
        }

        if let Some(path) = std::env::var(ENV_CONFIG)
            .ok()
            .filter(|value| !value.trim().is_empty())
        {
            *source = ConfigSource::Env;
            let path = PathBuf::from(path.trim());
            return Ok((Config::load_required(&path)?, Some(path)));
        }

        let path = Config::config_path();
        if path.exists() {
            *source = ConfigSource::ConfigFile;
            Ok((Config::load_required(&path)?, Some(path)))
        } else {
            *source = ConfigSource::Default;
            tracing::debug!(?path, "Config file not found, using built-in dashboard");
            Ok((Config::default(), None))
        }
    }

    /// Resolve output format setting.
    fn resolve_format(
        cli: &Cli,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat> {
        // 1. CLI --json / --format
        if let Some(format) = cli.cli_format() {
            *source = ConfigSource::Cli;
            return Ok(format);
        }

        // 2. Environment variable
        if let Ok(format_env) = std::env::var(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return Self::parse_format(ENV_FORMAT, &format_env);
        }

        // 3. Config file
        if let Some(ref format_str) = config.output.format {
            *source = ConfigSource::ConfigFile;
            return Self::parse_format("output.format", format_str);
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    /// Parse a format string into `OutputFormat`.
    fn parse_format(key: &str, s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Md),
            "html" => Ok(OutputFormat::Html),
            _ => Err(DashboardError::ConfigInvalid {
                key: key.to_string(),
                value: s.to_string(),
                message: format!("invalid format '{s}'. Valid formats: human, json, md, html"),
            }),
        }
    }

    /// Resolve `no_color` setting.
    fn resolve_no_color(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.no_color {
            *source = ConfigSource::Cli;
            return true;
        }

        if is_env_truthy(ENV_NO_COLOR) || std::env::var(ENV_NO_COLOR_STD).is_ok() {
            *source = ConfigSource::Env;
            return true;
        }

        // config.output.color = false means no_color = true
        if !config.output.color {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    /// Resolve pretty setting.
    fn resolve_pretty(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }

        if is_env_truthy(ENV_PRETTY) {
            *source = ConfigSource::Env;
            return true;
        }

        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    /// Resolve the bind address.
    fn resolve_host(
        serve_args: Option<&ServeArgs>,
        config: &Config,
        source: &mut ConfigSource,
    ) -> String {
        if let Some(host) = serve_args.and_then(|args| args.host.clone()) {
            *source = ConfigSource::Cli;
            return host;
        }

        if config.server.host != DEFAULT_HOST {
            *source = ConfigSource::ConfigFile;
            return config.server.host.clone();
        }

        *source = ConfigSource::Default;
        DEFAULT_HOST.to_string()
    }

    /// Resolve the server port.
    fn resolve_port(
        serve_args: Option<&ServeArgs>,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<u16> {
        let port = if let Some(port) = serve_args.and_then(|args| args.port) {
            *source = ConfigSource::Cli;
            port
        } else if let Ok(port_env) = std::env::var(ENV_PORT) {
            *source = ConfigSource::Env;
            port_env
                .trim()
                .parse::<u16>()
                .map_err(|_| DashboardError::ConfigInvalid {
                    key: ENV_PORT.to_string(),
                    value: port_env.clone(),
                    message: "expected a port number between 1 and 65535".to_string(),
                })?
        } else if config.server.port == DEFAULT_PORT {
            *source = ConfigSource::Default;
            DEFAULT_PORT
        } else {
            *source = ConfigSource::ConfigFile;
            config.server.port
        };

        if port == 0 {
            return Err(DashboardError::ConfigInvalid {
                key: "port".to_string(),
                value: "0".to_string(),
                message: "port must be between 1 and 65535".to_string(),
            });
        }
        Ok(port)
    }
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var: &str) -> bool {
    std::env::var(var)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

// =============================================================================
// Config File
// =============================================================================

/// Application configuration.
///
/// Every section is optional in the file; omitted sections keep the built-in
/// dashboard data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page heading text.
    pub page: PageConfig,
    /// Environment info line.
    pub organization: OrgInfo,
    /// Quota cards, in display order.
    pub quotas: Vec<NamedQuota>,
    /// User leaderboard.
    pub users: Vec<LeaderboardEntry>,
    /// AI bot usage ranking.
    pub bots: Vec<LeaderboardEntry>,
    /// Daily usage points.
    pub trend: Vec<TrendPoint>,
    /// Usage analysis section.
    pub analysis: AnalysisConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

/// Page heading text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub subtitle: String,
}

/// Usage analysis section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Series name of the trend chart.
    pub trend_name: String,
    /// Conclusion paragraph.
    pub text: String,
}

/// Output formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, md, html).
    pub format: Option<String>,
    /// Whether to use colors in output.
    pub color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            organization: OrgInfo::default(),
            quotas: builtin_quotas(),
            users: builtin_users(),
            bots: builtin_bots(),
            trend: builtin_trend_points(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: BUILTIN_TITLE.to_string(),
            subtitle: BUILTIN_SUBTITLE.to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            trend_name: BUILTIN_TREND_NAME.to_string(),
            text: BUILTIN_ANALYSIS.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns the built-in config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path, falling back to the
    /// built-in config when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_required(path)
    }

    /// Load configuration from a path that must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` for a missing file and `ConfigParse` for
    /// invalid TOML.
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DashboardError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|message| DashboardError::ConfigParse {
            path: path.display().to_string(),
            message,
        })
    }

    /// Parse TOML text. The error is the parser's message.
    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DashboardError::Config(format!("failed to serialize config: {e}")))
    }

    /// Save configuration to a specific path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or I/O failure.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_toml()?)?;
        tracing::debug!(?path, "Config file saved");
        Ok(())
    }

    /// Get the default config file path.
    #[must_use]
    pub fn config_path() -> PathBuf {
        AppPaths::new().config_file()
    }

    /// Validate configuration values.
    ///
    /// Checks that:
    /// - Quota keys are unique
    /// - Output format is valid (human, json, md, html)
    /// - Server port is not 0
    ///
    /// A quota with a zero total is not rejected here; it renders as an
    /// error card.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for quota in &self.quotas {
            if !seen.insert(quota.key.as_str()) {
                return Err(DashboardError::ConfigInvalid {
                    key: "quotas.key".to_string(),
                    value: quota.key.clone(),
                    message: format!("duplicate quota key \"{}\"", quota.key),
                });
            }
        }

        if let Some(format) = &self.output.format {
            if !["human", "json", "md", "markdown", "html"]
                .contains(&format.trim().to_lowercase().as_str())
            {
                return Err(DashboardError::ConfigInvalid {
                    key: "output.format".to_string(),
                    value: format.clone(),
                    message: format!(
                        "invalid format \"{format}\". Valid formats: human, json, md, html"
                    ),
                });
            }
        }

        if self.server.port == 0 {
            return Err(DashboardError::ConfigInvalid {
                key: "server.port".to_string(),
                value: "0".to_string(),
                message: "port must be between 1 and 65535".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ColorTier;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    const ALL_ENV: &[&str] = &[
        ENV_CONFIG,
        ENV_FORMAT,
        ENV_NO_COLOR,
        ENV_NO_COLOR_STD,
        ENV_PRETTY,
        ENV_PORT,
    ];

    /// Run `f` with exactly the given charboard env vars set.
    #[allow(unsafe_code)]
    fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let prior: Vec<_> = ALL_ENV.iter().map(|k| (*k, std::env::var(k).ok())).collect();
        for key in ALL_ENV {
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in vars {
            unsafe { std::env::set_var(key, value) };
        }
        f();
        for (key, value) in prior {
            match value {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }

    /// CLI pointed at an isolated (empty) config file.
    fn cli_with_config(file: &NamedTempFile, extra: &[&str]) -> Cli {
        let path = file.path().to_string_lossy().to_string();
        let mut args = vec!["charboard", "--config", path.as_str()];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn default_config_is_builtin_dashboard() {
        let config = Config::default();
        assert_eq!(config.quotas.len(), 3);
        assert_eq!(config.users.len(), 5);
        assert_eq!(config.bots.len(), 4);
        assert_eq!(config.trend.len(), 5);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_missing_file_returns_default() {
        let config = Config::load_from(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_required_missing_file_is_not_found() {
        let err = Config::load_required(Path::new("/nonexistent/path/config.toml")).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigNotFound { .. }));
    }

    #[test]
    fn partial_file_keeps_builtin_sections() {
        let file = config_file(
            r#"
[page]
title = "Lab 7"

[[quotas]]
key = "main"
title = "Main quota"
used = 10
total = 40
reset_date = "2026/1/1"
color_tier = "green"
"#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.page.title, "Lab 7");
        assert_eq!(config.page.subtitle, BUILTIN_SUBTITLE);
        assert_eq!(config.quotas.len(), 1);
        assert_eq!(config.quotas[0].record.total, 40);
        assert_eq!(config.quotas[0].record.color_tier, ColorTier::Green);
        assert_eq!(config.users, builtin_users());
        assert_eq!(config.organization.agency_code, "A123");
    }

    #[test]
    fn unknown_tier_and_missing_tier_are_default() {
        let file = config_file(
            r#"
[[quotas]]
key = "a"
title = "A"
used = 1
total = 2
reset_date = "x"
color_tier = "purple"

[[quotas]]
key = "b"
title = "B"
used = 1
total = 2
reset_date = "x"
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.quotas[0].record.color_tier, ColorTier::Default);
        assert_eq!(config.quotas[1].record.color_tier, ColorTier::Default);
    }

    #[test]
    fn trend_points_parse_from_strings() {
        let file = config_file(
            r#"
[[trend]]
date = "2025-10-02"
value = 7

[[trend]]
date = "2025-10-01"
value = 3
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.trend.len(), 2);
        assert_eq!(config.trend[0].value, 7);
    }

    #[test]
    fn load_invalid_toml_is_parse_error() {
        let file = config_file("this is not valid toml {{{{");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigParse { .. }));
    }

    #[test]
    fn roundtrip_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.pretty = true;
        config.server.port = 9000;

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn validate_duplicate_quota_keys() {
        let mut config = Config::default();
        let dup = config.quotas[0].clone();
        config.quotas.push(dup);
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("duplicate quota key"), "{err}");
    }

    #[test]
    fn validate_invalid_format() {
        let mut config = Config::default();
        config.output.format = Some("yaml".to_string());
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("invalid format"), "{err}");

        for format in ["human", "json", "md", "html"] {
            config.output.format = Some(format.to_string());
            assert!(config.validate().is_ok(), "format '{format}' should be valid");
        }
    }

    #[test]
    fn validate_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_total_quota_is_not_a_config_error() {
        let mut config = Config::default();
        config.quotas[0].record.total = 0;
        assert!(config.validate().is_ok());
    }

    // -------------------------------------------------------------------------
    // ResolvedConfig tests
    // -------------------------------------------------------------------------

    #[test]
    fn config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Cli), "CLI flag");
        assert_eq!(format!("{}", ConfigSource::Env), "environment variable");
        assert_eq!(format!("{}", ConfigSource::ConfigFile), "config file");
        assert_eq!(format!("{}", ConfigSource::Default), "default");
    }

    #[test]
    fn resolved_defaults() {
        let file = config_file("");
        with_env(&[], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap();
            assert_eq!(resolved.format, OutputFormat::Human);
            assert_eq!(resolved.sources.format, ConfigSource::Default);
            assert!(!resolved.no_color);
            assert!(!resolved.pretty);
            assert_eq!(resolved.host, DEFAULT_HOST);
            assert_eq!(resolved.port, DEFAULT_PORT);
            assert_eq!(resolved.sources.config_path, ConfigSource::Cli);
        });
    }

    #[test]
    fn format_precedence_cli_env_file() {
        let file = config_file("[output]\nformat = \"md\"\n");
        with_env(&[], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap();
            assert_eq!(resolved.format, OutputFormat::Md);
            assert_eq!(resolved.sources.format, ConfigSource::ConfigFile);
        });
        with_env(&[(ENV_FORMAT, "html")], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap();
            assert_eq!(resolved.format, OutputFormat::Html);
            assert_eq!(resolved.sources.format, ConfigSource::Env);

            let resolved =
                ResolvedConfig::resolve(&cli_with_config(&file, &["--json"]), None).unwrap();
            assert_eq!(resolved.format, OutputFormat::Json);
            assert_eq!(resolved.sources.format, ConfigSource::Cli);
        });
    }

    #[test]
    fn invalid_env_format_is_error() {
        let file = config_file("");
        with_env(&[(ENV_FORMAT, "yaml")], || {
            let err = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap_err();
            assert!(matches!(err, DashboardError::ConfigInvalid { .. }));
        });
    }

    #[test]
    fn no_color_from_env_and_file() {
        let file = config_file("[output]\ncolor = false\n");
        with_env(&[], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap();
            assert!(resolved.no_color);
            assert_eq!(resolved.sources.no_color, ConfigSource::ConfigFile);
        });
        let empty = config_file("");
        with_env(&[(ENV_NO_COLOR_STD, "")], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&empty, &[]), None).unwrap();
            assert!(resolved.no_color);
            assert_eq!(resolved.sources.no_color, ConfigSource::Env);
        });
    }

    #[test]
    fn pretty_from_env() {
        let file = config_file("");
        with_env(&[(ENV_PRETTY, "yes")], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap();
            assert!(resolved.pretty);
            assert_eq!(resolved.sources.pretty, ConfigSource::Env);
        });
    }

    #[test]
    fn port_precedence() {
        let file = config_file("[server]\nport = 9001\n");
        with_env(&[], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap();
            assert_eq!(resolved.port, 9001);
            assert_eq!(resolved.sources.port, ConfigSource::ConfigFile);
        });
        with_env(&[(ENV_PORT, "9002")], || {
            let resolved = ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).unwrap();
            assert_eq!(resolved.port, 9002);

            let serve = ServeArgs {
                port: Some(9003),
                host: Some("0.0.0.0".to_string()),
                ..ServeArgs::default()
            };
            let resolved =
                ResolvedConfig::resolve(&cli_with_config(&file, &[]), Some(&serve)).unwrap();
            assert_eq!(resolved.port, 9003);
            assert_eq!(resolved.host, "0.0.0.0");
            assert_eq!(resolved.sources.port, ConfigSource::Cli);
        });
    }

    #[test]
    fn bad_env_port_is_error() {
        let file = config_file("");
        for value in ["0", "not-a-port", "70000"] {
            with_env(&[(ENV_PORT, value)], || {
                assert!(ResolvedConfig::resolve(&cli_with_config(&file, &[]), None).is_err());
            });
        }
    }

    #[test]
    fn env_config_path_is_used() {
        let file = config_file("[page]\ntitle = \"From env\"\n");
        let path = file.path().to_string_lossy().to_string();
        with_env(&[(ENV_CONFIG, path.as_str())], || {
            let resolved = ResolvedConfig::resolve(&Cli::parse_from(["charboard"]), None).unwrap();
            assert_eq!(resolved.config.page.title, "From env");
            assert_eq!(resolved.sources.config_path, ConfigSource::Env);
        });
    }

    #[test]
    fn explicit_missing_config_is_error() {
        with_env(&[], || {
            let cli = Cli::parse_from(["charboard", "--config", "/nonexistent/charboard.toml"]);
            let err = ResolvedConfig::resolve(&cli, None).unwrap_err();
            assert!(matches!(err, DashboardError::ConfigNotFound { .. }));
        });
    }
}
