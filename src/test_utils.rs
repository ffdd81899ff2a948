//! Test utilities for charboard.
//!
//! Factories for dashboard data, a scratch directory for config files and
//! string assertion macros shared by unit and integration tests.
//!
//! ```rust,ignore
//! use charboard::test_utils::*;
//!
//! let dir = TestDir::new();
//! let path = dir.create_file("config.toml", &make_test_config_toml());
//! let dashboard = make_test_dashboard();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::core::dashboard::{DashboardOptions, build_dashboard};
use crate::core::models::{
    ColorTier, Dashboard, LeaderboardEntry, NamedQuota, QuotaRecord, TrendPoint,
};
use crate::core::provider::StaticDataProvider;
use crate::storage::config::Config;

// =============================================================================
// Test Data Factories
// =============================================================================

/// A quota record with the given usage, resetting on a fixed date.
#[must_use]
pub fn make_test_quota(used: u64, total: u64) -> QuotaRecord {
    QuotaRecord::new(used, total, "116/1/1 (2027/1/1)")
}

/// A keyed quota card entry.
#[must_use]
pub fn make_test_named_quota(key: &str, used: u64, total: u64) -> NamedQuota {
    NamedQuota {
        key: key.to_string(),
        title: format!("{key} 額度"),
        record: make_test_quota(used, total),
    }
}

/// A quota whose total is zero; it renders as an error card.
#[must_use]
pub fn make_test_zero_total_quota(key: &str) -> NamedQuota {
    NamedQuota {
        key: key.to_string(),
        title: "空額度".to_string(),
        record: QuotaRecord::new(10, 0, "-").with_tier(ColorTier::Default),
    }
}

/// A trend point on a September 2025 day.
///
/// # Panics
///
/// Panics if `day` is not a valid day of September.
#[must_use]
pub fn make_test_trend_point(day: u32, value: u64) -> TrendPoint {
    TrendPoint {
        date: NaiveDate::from_ymd_opt(2025, 9, day).expect("valid September day"),
        value,
    }
}

/// Leaderboard entries from `(label, value)` pairs.
#[must_use]
pub fn make_test_leaderboard(entries: &[(&str, u64)]) -> Vec<LeaderboardEntry> {
    entries
        .iter()
        .map(|(label, value)| LeaderboardEntry::new(*label, *value))
        .collect()
}

/// The built-in dashboard with no range filter.
#[must_use]
pub fn make_test_dashboard() -> Dashboard {
    build_dashboard(&StaticDataProvider::builtin(), &DashboardOptions::default())
}

/// A dashboard built from a config holding the given quotas.
#[must_use]
pub fn make_test_dashboard_with_quotas(quotas: Vec<NamedQuota>) -> Dashboard {
    let config = Config {
        quotas,
        ..Config::default()
    };
    build_dashboard(
        &StaticDataProvider::from_config(&config),
        &DashboardOptions::default(),
    )
}

/// A small config file exercising every section.
#[must_use]
pub fn make_test_config_toml() -> String {
    r#"[page]
title = "測試儀表板"
subtitle = "Test Board"

[organization]
agency_code = "T001"
agency_name = "測試機關"
hostname = "test-host"

[[quotas]]
key = "main"
title = "主要額度"
used = 250000
total = 1000000
reset_date = "2026/1/1"

[[quotas]]
key = "bonus"
title = "獎勵額度"
used = 900
total = 1000
reset_date = "無歸零期限"
color_tier = "green"

[[users]]
label = "Alice"
value = 300

[[users]]
label = "Bob"
value = 700

[[bots]]
label = "Summarizer"
value = 42

[[trend]]
date = "2025-09-01"
value = 100

[[trend]]
date = "2025-09-02"
value = 300

[analysis]
trend_name = "每日字元"
text = "測試結論"

[output]
color = false
"#
    .to_string()
}

// =============================================================================
// Temp Directory Utilities
// =============================================================================

/// A scratch directory removed on drop.
pub struct TestDir {
    inner: tempfile::TempDir,
}

impl TestDir {
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("Failed to create temp directory"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Write `content` to `name` (parents created) and return its path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.inner.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Full path for `name` inside the directory.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Assertion Macros
// =============================================================================

/// Assert that a string contains a substring, printing the haystack on failure.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack = &$haystack;
        let needle = $needle;
        assert!(
            haystack.contains(needle),
            "Expected string to contain {:?}\n\nActual string:\n{}",
            needle,
            haystack
        );
    };
}

/// Assert that a string does NOT contain a substring.
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack = &$haystack;
        let needle = $needle;
        assert!(
            !haystack.contains(needle),
            "Expected string NOT to contain {:?}\n\nActual string:\n{}",
            needle,
            haystack
        );
    };
}

/// Assert that a string parses as JSON and return the value.
#[macro_export]
macro_rules! assert_json_valid {
    ($json:expr) => {
        match serde_json::from_str::<serde_json::Value>($json) {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected valid JSON, but parsing failed: {}\n\nJSON string:\n{}",
                e, $json
            ),
        }
    };
}

/// Assert that output carries no terminal escape codes.
#[macro_export]
macro_rules! assert_no_ansi_codes {
    ($text:expr) => {
        let text = &$text;
        assert!(
            !$crate::test_utils::has_ansi_codes(text),
            "Expected string to NOT contain ANSI escape codes.\n\nActual string:\n{:?}",
            text
        );
    };
}

// =============================================================================
// Test Helpers
// =============================================================================

/// Whether `text` contains an escape character.
#[must_use]
pub fn has_ansi_codes(text: &str) -> bool {
    text.contains('\x1b')
}

/// Strip CSI escape sequences (`ESC [ ... letter`).
#[must_use]
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            result.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        }
    }

    result
}
