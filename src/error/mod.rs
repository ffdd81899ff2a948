//! Error types for charboard.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized into four categories:
//! - **Quota**: Misconfigured quota records and dashboard inputs
//! - **Configuration**: Config file parsing, validation, or missing values
//! - **Server**: Binding or serving the dashboard over HTTP
//! - **Internal**: I/O, serialization, or unclassified failures
//!
//! Each error has a stable error code (e.g., `CHB-Q001`) for programmatic handling.

pub mod suggestions;

use chrono::NaiveDate;
use thiserror::Error;

pub use suggestions::FixSuggestion;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Quota and dashboard data issues (zero totals, bad ranges).
    Quota,
    /// Configuration issues (parse errors, invalid values, missing files).
    Configuration,
    /// HTTP server issues (bind failures).
    Server,
    /// Internal errors (I/O, serialization, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Quota => "Quota error",
            Self::Configuration => "Configuration error",
            Self::Server => "Server error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Quota => "Q",
            Self::Configuration => "C",
            Self::Server => "S",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Parse/config errors, invalid quota data
    ParseError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for charboard operations.
#[derive(Error, Debug)]
pub enum DashboardError {
    // ==========================================================================
    // Quota errors (Category: Quota)
    // ==========================================================================
    /// Quota total is zero, so no percentage can be computed.
    #[error("invalid quota '{title}': total must be positive (got {total})")]
    InvalidQuota { title: String, total: u64 },

    /// Date range start is after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Unknown data source selection.
    #[error("unknown data source: {0}")]
    UnknownDataSource(String),

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Configuration file not found at an explicitly requested path.
    #[error("config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // Server errors (Category: Server)
    // ==========================================================================
    /// Failed to bind the HTTP listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    // ==========================================================================
    // Internal errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTML template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DashboardError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidQuota { .. }
            | Self::InvalidDateRange { .. }
            | Self::UnknownDataSource(_)
            | Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_) => ExitCode::ParseError,

            Self::Bind { .. }
            | Self::Io(_)
            | Self::Json(_)
            | Self::Template(_)
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidQuota { .. }
            | Self::InvalidDateRange { .. }
            | Self::UnknownDataSource(_) => ErrorCategory::Quota,

            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_) => ErrorCategory::Configuration,

            Self::Bind { .. } => ErrorCategory::Server,

            Self::Io(_) | Self::Json(_) | Self::Template(_) | Self::Other(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `CHB-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidQuota { .. } => "CHB-Q001",
            Self::InvalidDateRange { .. } => "CHB-Q002",
            Self::UnknownDataSource(_) => "CHB-Q003",

            Self::ConfigNotFound { .. } => "CHB-C001",
            Self::ConfigParse { .. } => "CHB-C002",
            Self::ConfigInvalid { .. } => "CHB-C003",
            Self::Config(_) => "CHB-C004",

            Self::Bind { .. } => "CHB-S001",

            Self::Io(_) => "CHB-X001",
            Self::Json(_) => "CHB-X002",
            Self::Template(_) => "CHB-X003",
            Self::Other(_) => "CHB-X099",
        }
    }

    /// Returns actionable fix suggestions for this error.
    #[must_use]
    pub fn fix_suggestions(&self) -> Vec<FixSuggestion> {
        match self {
            Self::InvalidQuota { title, .. } => suggestions::invalid_quota_suggestions(title),
            Self::InvalidDateRange { .. } => suggestions::date_range_suggestions(),
            Self::UnknownDataSource(name) => suggestions::data_source_suggestions(name),
            Self::ConfigNotFound { path } => suggestions::config_not_found_suggestions(path),
            Self::ConfigParse { path, .. } => suggestions::config_parse_suggestions(path),
            Self::ConfigInvalid { key, .. } => suggestions::config_invalid_suggestions(key),
            Self::Bind { addr, .. } => suggestions::bind_suggestions(addr),
            Self::Config(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Template(_)
            | Self::Other(_) => Vec::new(),
        }
    }
}

/// Result type alias for charboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
