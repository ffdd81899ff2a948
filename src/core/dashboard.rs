//! Dashboard assembly.
//!
//! [`build_dashboard`] pulls everything from a [`DataProvider`], formats the
//! quota cards and derives the period summary from the filtered trend.

use crate::core::models::{CardSlot, Dashboard, DataSource, DateRange, SummaryMetric, TimeSeries};
use crate::core::provider::DataProvider;
use crate::core::quota::QuotaCard;
use crate::util::format::{format_compact, format_thousands};

/// Summary metric labels.
pub const METRIC_TOTAL: &str = "期間總用量";
pub const METRIC_AVERAGE: &str = "期間平均日用量";
pub const METRIC_PEAK: &str = "期間高峰日";

/// Page state chosen by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Inclusive range applied to the usage trend and summary.
    pub range: DateRange,
    /// Data source shown in the analysis header.
    pub source: DataSource,
}

impl DashboardOptions {
    #[must_use]
    pub const fn new(range: DateRange, source: DataSource) -> Self {
        Self { range, source }
    }
}

/// Assemble the page view model.
///
/// A card whose record cannot be formatted becomes [`CardSlot::Invalid`];
/// the rest of the page is unaffected.
#[must_use]
pub fn build_dashboard(provider: &dyn DataProvider, options: &DashboardOptions) -> Dashboard {
    let cards: Vec<CardSlot> = provider
        .quota_records()
        .into_iter()
        .map(|quota| match QuotaCard::format(&quota.title, &quota.record) {
            Ok(card) => CardSlot::Ready {
                key: quota.key,
                card,
            },
            Err(err) => CardSlot::Invalid {
                key: quota.key,
                title: quota.title,
                message: err.to_string(),
            },
        })
        .collect();

    let trend = provider.usage_trend(&options.range);
    let summary = summarize(&trend);

    tracing::debug!(
        cards = cards.len(),
        trend_points = trend.points.len(),
        range = %options.range.label(),
        source = options.source.cli_name(),
        "Built dashboard"
    );

    Dashboard {
        title: provider.title().to_string(),
        subtitle: provider.subtitle().to_string(),
        org: provider.org_info(),
        range: options.range,
        source: options.source,
        cards,
        users: provider.user_leaderboard(),
        bots: provider.bot_leaderboard(),
        trend,
        summary,
        analysis: provider.analysis(),
    }
}

/// Period total, average daily usage and peak day for a series.
///
/// An empty series yields `0`, `0` and `-`.
#[must_use]
pub fn summarize(trend: &TimeSeries) -> Vec<SummaryMetric> {
    let average = trend.average().unwrap_or(0);
    let peak = trend
        .peak()
        .map_or_else(|| "-".to_string(), |p| p.date.format("%Y-%m-%d").to_string());

    vec![
        SummaryMetric::new(METRIC_TOTAL, format_compact(trend.total())),
        SummaryMetric::new(METRIC_AVERAGE, format_thousands(i128::from(average))),
        SummaryMetric::new(METRIC_PEAK, peak),
    ]
}
