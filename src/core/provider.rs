//! Dashboard data providers.
//!
//! Renderers never read data directly; they ask a [`DataProvider`]. The only
//! implementation today is [`StaticDataProvider`], which serves immutable
//! records loaded from the config file (or the built-in defaults).

use chrono::NaiveDate;

use crate::core::models::{
    ColorTier, DateRange, LeaderboardEntry, NamedQuota, OrgInfo, QuotaRecord, TimeSeries,
    TrendPoint, ranked,
};
use crate::storage::config::Config;

/// Source of everything shown on the dashboard.
pub trait DataProvider: Send + Sync {
    /// Page heading.
    fn title(&self) -> &str;

    /// Line under the heading.
    fn subtitle(&self) -> &str;

    /// Environment info for the settings section.
    fn org_info(&self) -> OrgInfo;

    /// Quota records in display order.
    fn quota_records(&self) -> Vec<NamedQuota>;

    /// Daily usage restricted to `range`.
    fn usage_trend(&self, range: &DateRange) -> TimeSeries;

    /// Per-user usage, highest first.
    fn user_leaderboard(&self) -> Vec<LeaderboardEntry>;

    /// Per-bot usage, highest first.
    fn bot_leaderboard(&self) -> Vec<LeaderboardEntry>;

    /// Free-text analysis conclusion.
    fn analysis(&self) -> String;
}

/// Provider over immutable in-memory data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDataProvider {
    title: String,
    subtitle: String,
    org: OrgInfo,
    quotas: Vec<NamedQuota>,
    users: Vec<LeaderboardEntry>,
    bots: Vec<LeaderboardEntry>,
    trend: TimeSeries,
    analysis: String,
}

impl StaticDataProvider {
    /// Provider over the built-in sample dashboard.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_config(&Config::default())
    }

    /// Provider over the data sections of a loaded config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut org = config.organization.clone();
        if org.hostname.trim().is_empty() {
            if let Some(host) = crate::util::env::hostname() {
                org.hostname = host;
            }
        }

        Self {
            title: config.page.title.clone(),
            subtitle: config.page.subtitle.clone(),
            org,
            quotas: config.quotas.clone(),
            users: ranked(config.users.clone()),
            bots: ranked(config.bots.clone()),
            trend: TimeSeries::new(config.analysis.trend_name.clone(), config.trend.clone()),
            analysis: config.analysis.text.clone(),
        }
    }
}

impl Default for StaticDataProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DataProvider for StaticDataProvider {
    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> &str {
        &self.subtitle
    }

    fn org_info(&self) -> OrgInfo {
        self.org.clone()
    }

    fn quota_records(&self) -> Vec<NamedQuota> {
        self.quotas.clone()
    }

    fn usage_trend(&self, range: &DateRange) -> TimeSeries {
        self.trend.filtered(range)
    }

    fn user_leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.users.clone()
    }

    fn bot_leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.bots.clone()
    }

    fn analysis(&self) -> String {
        self.analysis.clone()
    }
}

// =============================================================================
// Built-in Sample Data
// =============================================================================

/// Built-in page heading.
pub const BUILTIN_TITLE: &str = "政府AI應用實驗站 測試(lab32)";
/// Built-in subtitle.
pub const BUILTIN_SUBTITLE: &str = "字元使用量監控儀表板";
/// Built-in trend series name.
pub const BUILTIN_TREND_NAME: &str = "每日使用字元數";
/// Built-in analysis conclusion.
pub const BUILTIN_ANALYSIS: &str = "目前總體用量主要來自「第一年度額度」，已消耗70%，需開始注意用量。\
建議優先使用「第二年度額度」，目前尚有超過90%的餘裕。自購額度使用率為60%，可作為備援。";

/// Built-in environment info.
#[must_use]
pub fn builtin_org() -> OrgInfo {
    OrgInfo {
        agency_code: "A123".to_string(),
        agency_name: "數位發展部".to_string(),
        hostname: "prod-server-01".to_string(),
    }
}

/// The three built-in quota cards.
#[must_use]
pub fn builtin_quotas() -> Vec<NamedQuota> {
    vec![
        NamedQuota {
            key: "year1".to_string(),
            title: "第一年度額度".to_string(),
            record: QuotaRecord::new(3_500_000, 5_000_000, "115/1/1 (2026/1/1)"),
        },
        NamedQuota {
            key: "year2".to_string(),
            title: "第二年度額度 (含獎勵)".to_string(),
            record: QuotaRecord::new(500_000, 6_000_000, "116/1/1 (2027/1/1)")
                .with_tier(ColorTier::Green),
        },
        NamedQuota {
            key: "self_purchase".to_string(),
            title: "自購額度".to_string(),
            record: QuotaRecord::new(1_200_000, 2_000_000, "無歸零期限"),
        },
    ]
}

/// Built-in user leaderboard.
#[must_use]
pub fn builtin_users() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("王小明", 120_000),
        LeaderboardEntry::new("陳大文", 98_000),
        LeaderboardEntry::new("林美麗", 76_000),
        LeaderboardEntry::new("黃國倫", 54_000),
        LeaderboardEntry::new("張雅婷", 32_000),
    ]
}

/// Built-in AI bot ranking.
#[must_use]
pub fn builtin_bots() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("文件摘要", 250_000),
        LeaderboardEntry::new("郵件草稿", 180_000),
        LeaderboardEntry::new("智能客服", 150_000),
        LeaderboardEntry::new("文章潤飾", 110_000),
    ]
}

/// Built-in daily usage points.
#[must_use]
pub fn builtin_trend_points() -> Vec<TrendPoint> {
    [
        (1, 8_500),
        (2, 9_200),
        (3, 10_500),
        (4, 9_800),
        (5, 15_000),
    ]
    .into_iter()
    .filter_map(|(day, value)| {
        NaiveDate::from_ymd_opt(2025, 9, day).map(|date| TrendPoint { date, value })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_cards() {
        let provider = StaticDataProvider::builtin();
        let keys: Vec<_> = provider
            .quota_records()
            .into_iter()
            .map(|q| q.key)
            .collect();
        assert_eq!(keys, vec!["year1", "year2", "self_purchase"]);
    }

    #[test]
    fn builtin_year2_is_green() {
        let quotas = builtin_quotas();
        assert_eq!(quotas[1].record.color_tier, ColorTier::Green);
        assert_eq!(quotas[0].record.color_tier, ColorTier::Default);
    }

    #[test]
    fn leaderboards_are_ranked() {
        let mut config = Config::default();
        config.users = vec![
            LeaderboardEntry::new("low", 1),
            LeaderboardEntry::new("high", 10),
        ];
        let provider = StaticDataProvider::from_config(&config);
        assert_eq!(provider.user_leaderboard()[0].label, "high");
    }

    #[test]
    fn trend_is_filtered_by_range() {
        let provider = StaticDataProvider::builtin();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 9, 4),
            NaiveDate::from_ymd_opt(2025, 9, 30),
        )
        .unwrap();
        let trend = provider.usage_trend(&range);
        assert_eq!(trend.points.len(), 2);
        assert_eq!(trend.total(), 24_800);
        assert_eq!(provider.usage_trend(&DateRange::unbounded()).points.len(), 5);
    }

    #[test]
    fn builtin_trend_has_five_days() {
        assert_eq!(builtin_trend_points().len(), 5);
    }
}
