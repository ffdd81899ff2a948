//! Fix suggestion database for charboard errors.
//!
//! Provides actionable fix suggestions mapped to specific error types,
//! including commands, context explanations, and prevention tips.

// =============================================================================
// Fix Suggestion Types
// =============================================================================

/// A fix suggestion for an error.
#[derive(Debug, Clone)]
pub struct FixSuggestion {
    /// Primary fix commands in order of preference.
    pub commands: Vec<String>,

    /// Explanation of why this error occurred.
    pub context: String,

    /// Tips to prevent this error in the future.
    pub prevention: Option<String>,
}

impl FixSuggestion {
    /// Creates a new fix suggestion with required fields.
    #[must_use]
    pub fn new(commands: Vec<String>, context: impl Into<String>) -> Self {
        Self {
            commands,
            context: context.into(),
            prevention: None,
        }
    }

    /// Builder: adds prevention tips.
    #[must_use]
    pub fn with_prevention(mut self, prevention: impl Into<String>) -> Self {
        self.prevention = Some(prevention.into());
        self
    }
}

// =============================================================================
// Quota Suggestions
// =============================================================================

/// Suggestions for a quota record whose total is zero.
#[must_use]
pub fn invalid_quota_suggestions(title: &str) -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec![
                "charboard init --print".to_string(),
                "# Then set a positive `total` for the quota in config.toml".to_string(),
            ],
            format!("The quota \"{title}\" has a total of 0 characters, so its usage percentage is undefined."),
        )
        .with_prevention("Every [[quotas]] entry needs total > 0."),
    ]
}

/// Suggestions for an inverted date range.
#[must_use]
pub fn date_range_suggestions() -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["charboard render --from 2025-09-01 --to 2025-09-05".to_string()],
        "The start date must be on or before the end date.",
    )]
}

/// Suggestions for an unknown data source name.
#[must_use]
pub fn data_source_suggestions(name: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["charboard render --source total".to_string()],
        format!("\"{name}\" is not a data source. Valid sources: total, year1, year2, self-purchase."),
    )]
}

// =============================================================================
// Configuration Suggestions
// =============================================================================

/// Suggestions for a missing config file.
#[must_use]
pub fn config_not_found_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec![format!("charboard init --path {path}")],
            "The config file passed via --config or CHARBOARD_CONFIG does not exist.",
        )
        .with_prevention("Omit --config to fall back to the built-in dashboard data."),
    ]
}

/// Suggestions for an unparseable config file.
#[must_use]
pub fn config_parse_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![
            format!("mv {path} {path}.bak"),
            "charboard init".to_string(),
        ],
        "The config file is not valid TOML or has fields of the wrong type.",
    )]
}

/// Suggestions for an invalid config value.
#[must_use]
pub fn config_invalid_suggestions(key: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["charboard init --print".to_string()],
        format!("The value for '{key}' is out of range. Compare with the defaults printed above."),
    )]
}

// =============================================================================
// Server Suggestions
// =============================================================================

/// Suggestions for a listener that failed to bind.
#[must_use]
pub fn bind_suggestions(addr: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["charboard serve --port 8502".to_string()],
        format!("Another process may already be listening on {addr}."),
    )]
}
