//! Horizontal bar list for usage rankings.

use crate::core::models::LeaderboardEntry;
use crate::rich::{Renderable, ThemeConfig, segments_to_string};
use crate::util::format::format_thousands;
use rich_rust::prelude::*;

use super::formatters::{display_width, filled_cells, pad_left, pad_right};

/// Ranked entries drawn as bars scaled to the largest value.
#[derive(Debug)]
pub struct LeaderboardBars<'a> {
    title: &'a str,
    entries: &'a [LeaderboardEntry],
    theme: &'a ThemeConfig,
    bar_width: usize,
}

impl<'a> LeaderboardBars<'a> {
    #[must_use]
    pub const fn new(
        title: &'a str,
        entries: &'a [LeaderboardEntry],
        theme: &'a ThemeConfig,
    ) -> Self {
        Self {
            title,
            entries,
            theme,
            bar_width: 24,
        }
    }

    /// Set the width of the longest bar.
    #[must_use]
    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(4);
        self
    }

    fn max_value(&self) -> u64 {
        self.entries.iter().map(|e| e.value).max().unwrap_or(0)
    }

    fn label_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| display_width(&e.label))
            .max()
            .unwrap_or(0)
    }

    fn value_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| format_thousands(i128::from(e.value)).len())
            .max()
            .unwrap_or(0)
    }

    /// Bar length for one entry.
    fn cells(&self, value: u64) -> usize {
        let max = self.max_value();
        if max == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss)] // character counts stay far below 2^53
        let percent = value as f64 / max as f64 * 100.0;
        filled_cells(percent, self.bar_width)
    }

    /// Render as styled lines (title first).
    #[must_use]
    pub fn render_lines(&self) -> Vec<Vec<Segment<'static>>> {
        let label_width = self.label_width();
        let value_width = self.value_width();
        let mut lines = vec![vec![Segment::styled(
            self.title.to_string(),
            self.theme.secondary.clone(),
        )]];

        if self.entries.is_empty() {
            lines.push(vec![Segment::styled("(無資料)".to_string(), self.theme.muted.clone())]);
            return lines;
        }

        for entry in self.entries {
            let cells = self.cells(entry.value);
            lines.push(vec![
                Segment::styled(pad_right(&entry.label, label_width), self.theme.muted.clone()),
                Segment::plain(" "),
                Segment::styled("█".repeat(cells), self.theme.accent_info.clone()),
                Segment::plain(" ".repeat(self.bar_width - cells + 1)),
                Segment::styled(
                    pad_left(&format_thousands(i128::from(entry.value)), value_width),
                    self.theme.count.clone(),
                ),
            ]);
        }
        lines
    }
}

impl Renderable for LeaderboardBars<'_> {
    fn render(&self) -> String {
        self.render_lines()
            .iter()
            .map(|line| segments_to_string(line, true, self.theme.color_depth))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_plain(&self) -> String {
        let label_width = self.label_width();
        let value_width = self.value_width();
        let mut lines = vec![self.title.to_string()];

        if self.entries.is_empty() {
            lines.push("(無資料)".to_string());
        }

        for entry in self.entries {
            let cells = self.cells(entry.value);
            lines.push(format!(
                "{} {}{} {}",
                pad_right(&entry.label, label_width),
                "#".repeat(cells),
                " ".repeat(self.bar_width - cells),
                pad_left(&format_thousands(i128::from(entry.value)), value_width),
            ));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::builtin_users;
    use crate::rich::{contains_ansi, create_default_theme};

    #[test]
    fn top_entry_gets_full_bar() {
        let theme = create_default_theme();
        let users = builtin_users();
        let plain = LeaderboardBars::new("使用者排行榜", &users, &theme)
            .bar_width(10)
            .render_plain();
        let lines: Vec<_> = plain.lines().collect();
        assert_eq!(lines[0], "使用者排行榜");
        assert!(lines[1].starts_with("王小明 ##########"));
        assert!(lines[1].ends_with("120,000"));
        assert!(lines[5].contains("32,000"));
        assert!(!contains_ansi(&plain));
    }

    #[test]
    fn bars_are_proportional() {
        let theme = create_default_theme();
        let entries = vec![
            LeaderboardEntry::new("a", 100),
            LeaderboardEntry::new("b", 50),
        ];
        let board = LeaderboardBars::new("t", &entries, &theme).bar_width(10);
        assert_eq!(board.cells(100), 10);
        assert_eq!(board.cells(50), 5);
    }

    #[test]
    fn empty_board_says_no_data() {
        let theme = create_default_theme();
        let plain = LeaderboardBars::new("AI Bots 使用量排行榜", &[], &theme).render_plain();
        assert!(plain.contains("(無資料)"));
    }

    #[test]
    fn all_zero_values_draw_no_bars() {
        let theme = create_default_theme();
        let entries = vec![LeaderboardEntry::new("idle", 0)];
        let plain = LeaderboardBars::new("t", &entries, &theme).render_plain();
        assert!(!plain.contains('#'));
    }
}
