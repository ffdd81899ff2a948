//! Usage bar component for displaying quota consumption.

use crate::core::quota::Accent;
use crate::rich::{Renderable, ThemeConfig, create_default_theme, segments_to_string};
use rich_rust::prelude::*;

use super::formatters::filled_cells;

/// A horizontal bar whose fill is clamped to `[0, 100]` percent.
///
/// The percentage label shows the unclamped value, so an over-quota card
/// reads `120.0%` next to a full bar.
#[derive(Debug, Clone)]
pub struct UsageBar {
    percentage: f64,
    width: usize,
    accent: Accent,
    show_percentage: bool,
}

impl UsageBar {
    /// Create a new usage bar for `percentage` (may exceed 100).
    #[must_use]
    pub const fn new(percentage: f64) -> Self {
        Self {
            percentage,
            width: 20,
            accent: Accent::Info,
            show_percentage: true,
        }
    }

    /// Set the bar width (number of characters).
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(5);
        self
    }

    /// Set the accent used for the fill and percentage.
    #[must_use]
    pub const fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    /// Set whether to show the percentage value.
    #[must_use]
    pub const fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    /// Filled fraction in percent, clamped.
    #[must_use]
    pub const fn fill(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    fn cells(&self) -> (usize, usize) {
        let filled = filled_cells(self.percentage, self.width);
        (filled, self.width - filled)
    }

    /// Render the bar as styled segments.
    #[must_use]
    pub fn render_segments(&self, theme: &ThemeConfig) -> Vec<Segment<'static>> {
        let (filled, empty) = self.cells();
        let mut segments = vec![
            Segment::styled("█".repeat(filled), theme.accent(self.accent).clone()),
            Segment::styled("░".repeat(empty), theme.bar_track.clone()),
        ];

        if self.show_percentage {
            segments.push(Segment::styled(
                format!(" {:>5.1}%", self.percentage),
                theme.accent(self.accent).clone(),
            ));
        }

        segments
    }
}

impl Renderable for UsageBar {
    fn render(&self) -> String {
        let theme = create_default_theme();
        segments_to_string(&self.render_segments(&theme), true, theme.color_depth)
    }

    fn render_plain(&self) -> String {
        let (filled, empty) = self.cells();
        let mut result = format!("[{}{}]", "#".repeat(filled), "-".repeat(empty));
        if self.show_percentage {
            result.push_str(&format!(" {:>5.1}%", self.percentage));
        }
        result
    }
}
