//! Quota card fragments.

use askama::Template;

use crate::core::models::CardSlot;
use crate::core::quota::{Accent, CardRow, QuotaCard};

/// Heading shown on a card that could not be formatted.
pub const ERROR_HEADING: &str = "無法顯示額度";

fn with_accent(base: &str, accent: Accent) -> String {
    match accent.bar_class() {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

/// Card for a formatted quota.
#[derive(Template)]
#[template(path = "card.html")]
pub struct QuotaCardTemplate<'a> {
    card: &'a QuotaCard,
    rows: [CardRow; 3],
}

impl<'a> QuotaCardTemplate<'a> {
    #[must_use]
    pub fn new(card: &'a QuotaCard) -> Self {
        Self {
            card,
            rows: card.rows(),
        }
    }

    fn fill_class(&self) -> String {
        with_accent("progress-bar-fill", self.card.accent)
    }

    fn percent_class(&self) -> String {
        with_accent("card-percent", self.card.accent)
    }

    fn bar_width(&self) -> String {
        format!("{:.1}", self.card.bar_fill())
    }
}

/// Error-state card that replaces a quota which failed to format.
#[derive(Template)]
#[template(path = "error_card.html")]
pub struct ErrorCardTemplate<'a> {
    title: &'a str,
    message: &'a str,
    heading: &'static str,
}

impl<'a> ErrorCardTemplate<'a> {
    #[must_use]
    pub const fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            heading: ERROR_HEADING,
        }
    }
}

/// Card markup for either slot state.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_card(slot: &CardSlot) -> askama::Result<String> {
    match slot {
        CardSlot::Ready { card, .. } => QuotaCardTemplate::new(card).render(),
        CardSlot::Invalid { title, message, .. } => ErrorCardTemplate::new(title, message).render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ColorTier, QuotaRecord};

    fn card_html(used: u64, total: u64, tier: ColorTier) -> String {
        let record = QuotaRecord::new(used, total, "115/1/1 (2026/1/1)").with_tier(tier);
        let card = QuotaCard::format("第一年度額度", &record).unwrap();
        QuotaCardTemplate::new(&card).render().unwrap()
    }

    #[test]
    fn card_has_rows_bar_and_footer() {
        let html = card_html(3_500_000, 5_000_000, ColorTier::Default);
        assert!(html.contains("<h3 class=\"card-title\">第一年度額度</h3>"));
        assert!(html.contains("<span>已使用</span><span class=\"card-value\">3,500,000</span>"));
        assert!(html.contains("<span>剩餘</span><span class=\"card-value\">1,500,000</span>"));
        assert!(html.contains("<span>總額度</span><span class=\"card-value\">5,000,000</span>"));
        assert!(html.contains("<div class=\"progress-bar-fill\" style=\"width: 70.0%;\">"));
        assert!(html.contains("<p class=\"card-percent\">70.0%</p>"));
        assert!(html.contains("<div class=\"card-footer\">115/1/1 (2026/1/1)</div>"));
    }

    #[test]
    fn green_tier_adds_green_classes() {
        let html = card_html(500_000, 6_000_000, ColorTier::Green);
        assert!(html.contains("progress-bar-fill green"));
        assert!(html.contains("<p class=\"card-percent green\">8.3%</p>"));
        assert!(html.contains("data-accent=\"#34d399\""));
    }

    #[test]
    fn over_quota_bar_is_clamped() {
        let html = card_html(6_000_000, 5_000_000, ColorTier::Default);
        assert!(html.contains("width: 100.0%;"));
        assert!(html.contains("120.0%"));
        assert!(html.contains("-1,000,000"));
    }

    #[test]
    fn error_card_escapes_title() {
        let html = ErrorCardTemplate::new("<b>自購</b>", "total must be positive")
            .render()
            .unwrap();
        assert!(html.contains("&lt;b&gt;自購&lt;/b&gt;"));
        assert!(html.contains(ERROR_HEADING));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn render_card_dispatches_on_slot() {
        let slot = CardSlot::Invalid {
            key: "k".to_string(),
            title: "自購額度".to_string(),
            message: "bad".to_string(),
        };
        assert!(render_card(&slot).unwrap().contains("quota-card-error"));
    }
}
