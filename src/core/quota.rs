//! Quota card formatting.
//!
//! Turns a [`QuotaRecord`] into the display fields of a quota card:
//! remaining amount, percentage used, and accent. Rendering of the card
//! itself lives in the renderers; everything here is pure.

use std::cmp::Ordering;

use serde::Serialize;

use crate::core::models::{ColorTier, QuotaRecord};
use crate::error::{DashboardError, Result};
use crate::util::format::format_thousands;

/// Row labels for the three numeric card rows.
pub const LABEL_USED: &str = "已使用";
pub const LABEL_REMAINING: &str = "剩餘";
pub const LABEL_TOTAL: &str = "總額度";

/// Accent applied to the percentage text and bar fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Success accent, used by the green tier.
    Success,
    /// Neutral/info accent, used by every other tier.
    Info,
}

impl Accent {
    /// Text color for the percentage label.
    #[must_use]
    pub const fn text_color(self) -> &'static str {
        match self {
            Self::Success => "#34d399",
            Self::Info => "#22d3ee",
        }
    }

    /// Fill color for the progress bar.
    #[must_use]
    pub const fn bar_color(self) -> &'static str {
        match self {
            Self::Success => "#22c55e",
            Self::Info => "#22d3ee",
        }
    }

    /// Extra CSS class on `.progress-bar-fill`, if any.
    #[must_use]
    pub const fn bar_class(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("green"),
            Self::Info => None,
        }
    }
}

impl From<ColorTier> for Accent {
    fn from(tier: ColorTier) -> Self {
        match tier {
            ColorTier::Green => Self::Success,
            ColorTier::Default => Self::Info,
        }
    }
}

/// A labelled numeric row on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRow {
    pub label: &'static str,
    pub value: String,
}

/// Display model for one quota card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotaCard {
    pub title: String,
    pub used: u64,
    pub total: u64,
    /// `total - used`; negative when over quota. Wide enough for any pair
    /// of `u64` inputs.
    pub remaining: i128,
    /// Unclamped `used / total * 100`.
    pub percentage: f64,
    pub reset_date: String,
    pub tier: ColorTier,
    pub accent: Accent,
}

impl QuotaCard {
    /// Compute the display fields for a quota record.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidQuota`] when `record.total` is zero.
    pub fn format(title: &str, record: &QuotaRecord) -> Result<Self> {
        if record.total == 0 {
            tracing::warn!(title, "Quota total is zero");
            return Err(DashboardError::InvalidQuota {
                title: title.to_string(),
                total: record.total,
            });
        }

        let remaining = i128::from(record.total) - i128::from(record.used);
        let percentage = percent_used(record.used, record.total);

        tracing::trace!(
            title,
            used = record.used,
            total = record.total,
            percentage,
            "Formatted quota card"
        );

        Ok(Self {
            title: title.to_string(),
            used: record.used,
            total: record.total,
            remaining,
            percentage,
            reset_date: record.reset_date.clone(),
            tier: record.color_tier,
            accent: Accent::from(record.color_tier),
        })
    }

    /// Percentage with one decimal, without the `%` sign (e.g. `70.0`).
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }

    /// Bar fill in percent, clamped to `[0, 100]`.
    #[must_use]
    pub const fn bar_fill(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    /// Whether more characters were used than allotted.
    #[must_use]
    pub const fn is_over_quota(&self) -> bool {
        self.used > self.total
    }

    /// The used / remaining / total rows, thousands-separated.
    #[must_use]
    pub fn rows(&self) -> [CardRow; 3] {
        [
            CardRow {
                label: LABEL_USED,
                value: format_thousands(i128::from(self.used)),
            },
            CardRow {
                label: LABEL_REMAINING,
                value: format_thousands(self.remaining),
            },
            CardRow {
                label: LABEL_TOTAL,
                value: format_thousands(i128::from(self.total)),
            },
        ]
    }
}

/// `used / total * 100`, exact at the 100% boundary.
///
/// Past 2^53 the float quotient can land on 100 when `used != total`; such
/// results are moved one ulp off 100.
fn percent_used(used: u64, total: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let percentage = (used as f64 / total as f64) * 100.0;
    match used.cmp(&total) {
        Ordering::Equal => 100.0,
        Ordering::Less if percentage >= 100.0 => 100.0_f64.next_down(),
        Ordering::Greater if percentage <= 100.0 => 100.0_f64.next_up(),
        _ => percentage,
    }
}

/// Free-function form of [`QuotaCard::format`].
///
/// # Errors
///
/// Returns [`DashboardError::InvalidQuota`] when `record.total` is zero.
pub fn format(title: &str, record: &QuotaRecord) -> Result<QuotaCard> {
    QuotaCard::format(title, record)
}
