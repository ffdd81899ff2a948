//! Quota card component: one panel per quota slot.

use crate::core::models::CardSlot;
use crate::core::quota::QuotaCard;
use crate::rich::{Renderable, ThemeConfig, segments_to_string};
use rich_rust::prelude::*;

use super::formatters::{display_width, pad_left, row_segments, spread};
use super::usage_bar::UsageBar;

/// Columns reserved for the percentage text after the bar.
const PERCENT_COLUMNS: usize = 8;

/// A styled panel for a formatted quota card or its error state.
#[derive(Debug)]
pub struct QuotaCardPanel<'a> {
    slot: &'a CardSlot,
    theme: &'a ThemeConfig,
    width: usize,
}

impl<'a> QuotaCardPanel<'a> {
    /// Create a card panel with the default width.
    #[must_use]
    pub const fn new(slot: &'a CardSlot, theme: &'a ThemeConfig) -> Self {
        Self {
            slot,
            theme,
            width: 40,
        }
    }

    /// Set the total panel width including borders.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(24);
        self
    }

    /// Columns available inside the border and padding.
    const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    fn bar(&self, card: &QuotaCard) -> UsageBar {
        UsageBar::new(card.percentage)
            .accent(card.accent)
            .width(self.inner_width().saturating_sub(PERCENT_COLUMNS))
            .show_percentage(false)
    }

    fn card_lines(&self, card: &QuotaCard) -> Vec<Vec<Segment<'static>>> {
        let inner = self.inner_width();
        let mut lines: Vec<Vec<Segment<'static>>> = card
            .rows()
            .iter()
            .map(|row| row_segments(row.label, &row.value, inner, self.theme))
            .collect();

        let mut bar_line = self.bar(card).render_segments(self.theme);
        bar_line.push(Segment::styled(
            pad_left(&format!("{}%", card.percentage_label()), PERCENT_COLUMNS),
            self.theme.accent(card.accent).clone(),
        ));
        lines.push(bar_line);

        let footer_pad = inner.saturating_sub(display_width(&card.reset_date)) / 2;
        lines.push(vec![Segment::styled(
            format!("{}{}", " ".repeat(footer_pad), card.reset_date),
            self.theme.muted.clone(),
        )]);
        lines
    }

    fn error_lines(&self, message: &str) -> Vec<Vec<Segment<'static>>> {
        vec![
            vec![Segment::styled("無法顯示額度".to_string(), self.theme.error.clone())],
            vec![Segment::styled(message.to_string(), self.theme.muted.clone())],
        ]
    }

    /// Build the rich panel.
    #[must_use]
    pub fn render_panel(&self) -> Panel<'static> {
        let title = Text::styled(self.slot.title(), self.theme.panel_title.clone());
        match self.slot {
            CardSlot::Ready { card, .. } => Panel::new(self.card_lines(card))
                .title(title)
                .border_style(self.theme.panel_border.clone())
                .padding((0, 1)),
            CardSlot::Invalid { message, .. } => Panel::new(self.error_lines(message))
                .title(title)
                .border_style(self.theme.panel_error_border.clone())
                .padding((0, 1)),
        }
    }
}

impl Renderable for QuotaCardPanel<'_> {
    fn render(&self) -> String {
        let segments = self.render_panel().render(self.width);
        segments_to_string(&segments, true, self.theme.color_depth)
    }

    fn render_plain(&self) -> String {
        let inner = self.inner_width();
        let mut lines = vec![format!("--- {} ---", self.slot.title())];

        match self.slot {
            CardSlot::Ready { card, .. } => {
                for row in card.rows() {
                    lines.push(spread(row.label, &row.value, inner));
                }
                lines.push(format!(
                    "{}{}",
                    self.bar(card).render_plain(),
                    pad_left(&format!("{}%", card.percentage_label()), PERCENT_COLUMNS)
                ));
                lines.push(card.reset_date.clone());
            }
            CardSlot::Invalid { message, .. } => {
                lines.push(format!("[!] {message}"));
            }
        }

        lines.join("\n")
    }
}
