//! Core data models for the dashboard.
//!
//! Quota records, leaderboards and the usage trend are immutable
//! configuration; the `Dashboard` view model is assembled from them once per
//! render.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::quota::QuotaCard;
use crate::error::{DashboardError, Result};

// =============================================================================
// Quota Records
// =============================================================================

/// Presentational accent classification for a quota card.
///
/// Unknown tags (including the empty string) fall back to `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ColorTier {
    /// Neutral/info accent.
    #[default]
    Default,
    /// Healthy/success accent.
    Green,
}

impl ColorTier {
    /// Parse a tier tag. Anything other than `green` is the default tier.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("green") {
            Self::Green
        } else {
            Self::Default
        }
    }

    /// Tag used in configuration files.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Green => "green",
        }
    }
}

impl From<String> for ColorTier {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// A character quota allotment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRecord {
    /// Characters consumed.
    pub used: u64,
    /// Total allotted characters. Must be positive.
    pub total: u64,
    /// Free-text reset label (a date, or a "no expiry" sentinel).
    pub reset_date: String,
    /// Accent selection.
    #[serde(default)]
    pub color_tier: ColorTier,
}

impl QuotaRecord {
    /// Create a record with the default tier.
    #[must_use]
    pub fn new(used: u64, total: u64, reset_date: impl Into<String>) -> Self {
        Self {
            used,
            total,
            reset_date: reset_date.into(),
            color_tier: ColorTier::Default,
        }
    }

    /// Builder: set the color tier.
    #[must_use]
    pub const fn with_tier(mut self, tier: ColorTier) -> Self {
        self.color_tier = tier;
        self
    }
}

/// A quota record with its card title and a stable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedQuota {
    /// Stable identifier (e.g. `year1`).
    pub key: String,
    /// Card title.
    pub title: String,
    #[serde(flatten)]
    pub record: QuotaRecord,
}

// =============================================================================
// Leaderboards and Trend
// =============================================================================

/// One row of a usage ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub label: String,
    pub value: u64,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Sort a ranking by value, highest first. Ties keep their configured order.
#[must_use]
pub fn ranked(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}

/// Daily character usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: u64,
}

/// A named, date-ordered series of usage points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub name: String,
    pub points: Vec<TrendPoint>,
}

impl TimeSeries {
    /// Create a series, ordering points by date.
    #[must_use]
    pub fn new(name: impl Into<String>, mut points: Vec<TrendPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self {
            name: name.into(),
            points,
        }
    }

    /// Keep only the points inside `range`.
    #[must_use]
    pub fn filtered(&self, range: &DateRange) -> Self {
        Self {
            name: self.name.clone(),
            points: self
                .points
                .iter()
                .filter(|p| range.contains(p.date))
                .copied()
                .collect(),
        }
    }

    /// Sum of all points. Accumulates in `u128` so no series of `u64`
    /// values can overflow it.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.points.iter().map(|p| u128::from(p.value)).sum()
    }

    /// Mean daily value, rounded to the nearest integer. `None` when empty.
    #[must_use]
    pub fn average(&self) -> Option<u64> {
        if self.points.is_empty() {
            return None;
        }
        let count = self.points.len() as u128;
        // The mean of u64 values always fits back into u64
        Some(u64::try_from((self.total() + count / 2) / count).unwrap_or(u64::MAX))
    }

    /// Point with the highest value. The earliest date wins ties.
    #[must_use]
    pub fn peak(&self) -> Option<TrendPoint> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.value > best.value { p } else { best })
    }

    /// Largest value in the series (0 when empty).
    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A labelled summary figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetric {
    pub label: String,
    pub value: String,
}

impl SummaryMetric {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Page Context
// =============================================================================

/// Environment information shown under the date settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgInfo {
    pub agency_code: String,
    pub agency_name: String,
    pub hostname: String,
}

impl Default for OrgInfo {
    fn default() -> Self {
        crate::core::provider::builtin_org()
    }
}

impl OrgInfo {
    /// One-line summary, e.g. `機關代碼: A123 | 機關名稱: 數位發展部 | 主機名稱: prod-server-01`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "機關代碼: {} | 機關名稱: {} | 主機名稱: {}",
            self.agency_code, self.agency_name, self.hostname
        )
    }
}

/// Inclusive date range. Open bounds match every date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DashboardError::InvalidDateRange { start: s, end: e });
            }
        }
        Ok(Self { start, end })
    }

    /// Range matching every date.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }

    /// Display label, e.g. `2025-09-01 ~ 2025-09-05` or `全部期間`.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.start, self.end) {
            (None, None) => "全部期間".to_string(),
            (Some(s), None) => format!("{s} ~"),
            (None, Some(e)) => format!("~ {e}"),
            (Some(s), Some(e)) => format!("{s} ~ {e}"),
        }
    }
}

/// Which quota the usage analysis is scoped to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    #[default]
    Total,
    Year1,
    Year2,
    SelfPurchase,
}

impl DataSource {
    pub const ALL: &'static [Self] = &[Self::Total, Self::Year1, Self::Year2, Self::SelfPurchase];

    /// Parse from a CLI/config name.
    pub fn from_arg(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "total" | "all" | "總用量" => Ok(Self::Total),
            "year1" | "第一年度" => Ok(Self::Year1),
            "year2" | "第二年度" => Ok(Self::Year2),
            "self-purchase" | "self_purchase" | "selfpurchase" | "自購" => {
                Ok(Self::SelfPurchase)
            }
            other => Err(DashboardError::UnknownDataSource(other.to_string())),
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Year1 => "year1",
            Self::Year2 => "year2",
            Self::SelfPurchase => "self-purchase",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "總用量",
            Self::Year1 => "第一年度",
            Self::Year2 => "第二年度",
            Self::SelfPurchase => "自購",
        }
    }
}

// =============================================================================
// Dashboard View Model
// =============================================================================

/// A quota card slot: either a formatted card or the error that replaced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CardSlot {
    Ready {
        key: String,
        #[serde(flatten)]
        card: QuotaCard,
    },
    Invalid {
        key: String,
        title: String,
        message: String,
    },
}

impl CardSlot {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Ready { key, .. } | Self::Invalid { key, .. } => key,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Ready { card, .. } => &card.title,
            Self::Invalid { title, .. } => title,
        }
    }

    #[must_use]
    pub const fn card(&self) -> Option<&QuotaCard> {
        match self {
            Self::Ready { card, .. } => Some(card),
            Self::Invalid { .. } => None,
        }
    }
}

/// The complete page, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub org: OrgInfo,
    pub range: DateRange,
    pub source: DataSource,
    pub cards: Vec<CardSlot>,
    pub users: Vec<LeaderboardEntry>,
    pub bots: Vec<LeaderboardEntry>,
    pub trend: TimeSeries,
    pub summary: Vec<SummaryMetric>,
    pub analysis: String,
}

impl Dashboard {
    /// Number of cards that could not be formatted.
    #[must_use]
    pub fn invalid_card_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|slot| matches!(slot, CardSlot::Invalid { .. }))
            .count()
    }
}

// =============================================================================
// Robot Output Envelope
// =============================================================================

/// Stable JSON envelope for machine consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotOutput<T> {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub command: String,
    pub data: T,
    pub errors: Vec<String>,
    pub meta: RobotMeta,
}

/// Metadata for robot output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotMeta {
    pub format: String,
    pub runtime: String,
}

impl<T> RobotOutput<T> {
    /// Create a new robot output envelope.
    pub fn new(command: impl Into<String>, data: T) -> Self {
        Self::with_errors(command, data, Vec::new())
    }

    /// Create with errors.
    pub fn with_errors(command: impl Into<String>, data: T, errors: Vec<String>) -> Self {
        Self {
            schema_version: "charboard.v1".to_string(),
            generated_at: Utc::now(),
            command: command.into(),
            data,
            errors,
            meta: RobotMeta {
                format: "json".to_string(),
                runtime: "cli".to_string(),
            },
        }
    }

    /// Builder: set the runtime label (`cli` or `server`).
    #[must_use]
    pub fn runtime(mut self, runtime: impl Into<String>) -> Self {
        self.meta.runtime = runtime.into();
        self
    }
}

impl RobotOutput<Dashboard> {
    /// Envelope for a dashboard render; invalid cards are listed as errors.
    #[must_use]
    pub fn dashboard(dashboard: Dashboard) -> Self {
        let errors = dashboard
            .cards
            .iter()
            .filter_map(|slot| match slot {
                CardSlot::Invalid { key, message, .. } => Some(format!("{key}: {message}")),
                CardSlot::Ready { .. } => None,
            })
            .collect();
        Self::with_errors("dashboard", dashboard, errors)
    }
}
