//! Sparkline component for the daily usage trend.

use crate::core::models::TimeSeries;
use crate::rich::{Renderable, ThemeConfig, segments_to_string};
use crate::util::format::format_thousands;
use rich_rust::prelude::*;

const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One tick per day, scaled to the series maximum.
#[derive(Debug)]
pub struct Sparkline<'a> {
    series: &'a TimeSeries,
    theme: &'a ThemeConfig,
}

impl<'a> Sparkline<'a> {
    #[must_use]
    pub const fn new(series: &'a TimeSeries, theme: &'a ThemeConfig) -> Self {
        Self { series, theme }
    }

    /// The tick characters, one per point.
    #[must_use]
    pub fn ticks(&self) -> String {
        let max = self.series.max_value();
        self.series
            .points
            .iter()
            .map(|p| {
                if max == 0 {
                    return TICKS[0];
                }
                #[allow(clippy::cast_possible_truncation)] // index is at most 7
                let idx = (u128::from(p.value) * 7 / u128::from(max)) as usize;
                TICKS[idx.min(TICKS.len() - 1)]
            })
            .collect()
    }

    /// First and last date of the series, e.g. `2025-09-01 → 2025-09-05`.
    fn span(&self) -> Option<String> {
        let first = self.series.points.first()?;
        let last = self.series.points.last()?;
        Some(format!("{} → {}", first.date, last.date))
    }

    /// Styled lines: title, ticks, date span.
    #[must_use]
    pub fn render_lines(&self) -> Vec<Vec<Segment<'static>>> {
        let mut lines = vec![vec![Segment::styled(
            self.series.name.clone(),
            self.theme.secondary.clone(),
        )]];
        match self.span() {
            Some(span) => {
                lines.push(vec![
                    Segment::styled(self.ticks(), self.theme.accent_info.clone()),
                    Segment::styled(
                        format!("  max {}", format_thousands(i128::from(self.series.max_value()))),
                        self.theme.muted.clone(),
                    ),
                ]);
                lines.push(vec![Segment::styled(span, self.theme.muted.clone())]);
            }
            None => {
                lines.push(vec![Segment::styled("(無資料)".to_string(), self.theme.muted.clone())]);
            }
        }
        lines
    }
}

impl Renderable for Sparkline<'_> {
    fn render(&self) -> String {
        self.render_lines()
            .iter()
            .map(|line| segments_to_string(line, true, self.theme.color_depth))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One `date  value` row per point.
    fn render_plain(&self) -> String {
        let mut lines = vec![self.series.name.clone()];
        if self.series.is_empty() {
            lines.push("(無資料)".to_string());
        }
        for point in &self.series.points {
            lines.push(format!(
                "{}  {:>10}",
                point.date,
                format_thousands(i128::from(point.value))
            ));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TrendPoint;
    use crate::core::provider::builtin_trend_points;
    use crate::rich::create_default_theme;

    #[test]
    fn peak_is_full_tick() {
        let theme = create_default_theme();
        let series = TimeSeries::new("每日使用字元數", builtin_trend_points());
        let ticks = Sparkline::new(&series, &theme).ticks();
        assert_eq!(ticks.chars().count(), 5);
        assert_eq!(ticks.chars().last(), Some('█'));
    }

    #[test]
    fn zero_series_is_flat() {
        let theme = create_default_theme();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let series = TimeSeries::new("x", vec![TrendPoint { date, value: 0 }]);
        assert_eq!(Sparkline::new(&series, &theme).ticks(), "▁");
    }

    #[test]
    fn plain_lists_every_day() {
        let theme = create_default_theme();
        let series = TimeSeries::new("每日使用字元數", builtin_trend_points());
        let plain = Sparkline::new(&series, &theme).render_plain();
        assert!(plain.contains("2025-09-01"));
        assert!(plain.contains("15,000"));
        assert_eq!(plain.lines().count(), 6);
    }

    #[test]
    fn empty_series() {
        let theme = create_default_theme();
        let series = TimeSeries::new("x", Vec::new());
        let sparkline = Sparkline::new(&series, &theme);
        assert!(sparkline.render_plain().contains("(無資料)"));
        assert!(sparkline.render().contains("(無資料)"));
    }
}
