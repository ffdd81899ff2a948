//! Chart collaborators.
//!
//! Page renderers hand leaderboards, the trend series and summary figures to
//! a [`ChartRenderer`] instead of drawing them directly. [`HtmlCharts`]
//! renders markup fragments from templates (div bars and inline SVG);
//! [`TerminalCharts`] produces text for the terminal, styled or plain.

use askama::Template;

use crate::core::models::{LeaderboardEntry, TimeSeries};
use crate::rich::components::{LeaderboardBars, Sparkline};
use crate::rich::{Renderable, Segment, ThemeConfig, segments_to_string};
use crate::util::format::format_thousands;

/// Draws the non-card parts of the dashboard.
pub trait ChartRenderer {
    type Output;

    /// Bar chart of a ranking. `x_field` captions the categories,
    /// `y_field` the values.
    fn bar_chart(&self, data: &[LeaderboardEntry], x_field: &str, y_field: &str) -> Self::Output;

    /// Line chart of a daily series.
    fn line_chart(&self, series: &TimeSeries) -> Self::Output;

    /// A single labelled figure.
    fn metric(&self, label: &str, value: &str) -> Self::Output;
}

// =============================================================================
// HTML
// =============================================================================

/// SVG canvas size for the trend chart.
const SVG_WIDTH: f64 = 600.0;
const SVG_HEIGHT: f64 = 240.0;
const SVG_PAD_LEFT: f64 = 56.0;
const SVG_PAD_RIGHT: f64 = 16.0;
const SVG_PAD_TOP: f64 = 16.0;
const SVG_PAD_BOTTOM: f64 = 32.0;

struct BarRow<'a> {
    label: &'a str,
    width: String,
    value: String,
}

#[derive(Template)]
#[template(path = "charts/bar.html")]
struct BarChartTemplate<'a> {
    x_field: &'a str,
    y_field: &'a str,
    rows: Vec<BarRow<'a>>,
}

struct LinePoint {
    x: String,
    y: String,
    tooltip: String,
    tick: String,
}

struct LineAxis {
    x1: String,
    x2: String,
    y: String,
    tick_y: String,
    max_label_y: String,
    max_label: String,
}

#[derive(Template)]
#[template(path = "charts/line.html")]
struct LineChartTemplate<'a> {
    name: &'a str,
    view_box: String,
    axis: LineAxis,
    polyline: String,
    points: Vec<LinePoint>,
}

#[derive(Template)]
#[template(path = "charts/metric.html")]
struct MetricTemplate<'a> {
    label: &'a str,
    value: &'a str,
}

/// Chart markup for the HTML page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCharts;

impl ChartRenderer for HtmlCharts {
    type Output = askama::Result<String>;

    fn bar_chart(&self, data: &[LeaderboardEntry], x_field: &str, y_field: &str) -> Self::Output {
        let max = data.iter().map(|e| e.value).max().unwrap_or(0);
        let rows = data
            .iter()
            .map(|entry| {
                #[allow(clippy::cast_precision_loss)] // bar widths only need display precision
                let width = if max == 0 {
                    0.0
                } else {
                    entry.value as f64 / max as f64 * 100.0
                };
                BarRow {
                    label: &entry.label,
                    width: format!("{width:.1}"),
                    value: format_thousands(i128::from(entry.value)),
                }
            })
            .collect();

        BarChartTemplate {
            x_field,
            y_field,
            rows,
        }
        .render()
    }

    fn line_chart(&self, series: &TimeSeries) -> Self::Output {
        let plot_w = SVG_WIDTH - SVG_PAD_LEFT - SVG_PAD_RIGHT;
        let plot_h = SVG_HEIGHT - SVG_PAD_TOP - SVG_PAD_BOTTOM;
        #[allow(clippy::cast_precision_loss)]
        let max = series.max_value().max(1) as f64;
        #[allow(clippy::cast_precision_loss)]
        let step = if series.points.len() > 1 {
            plot_w / (series.points.len() - 1) as f64
        } else {
            0.0
        };

        let coords: Vec<(f64, f64)> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                #[allow(clippy::cast_precision_loss)]
                let x = SVG_PAD_LEFT + step * i as f64;
                #[allow(clippy::cast_precision_loss)]
                let y = SVG_PAD_TOP + plot_h - (p.value as f64 / max) * plot_h;
                (x, y)
            })
            .collect();

        let polyline = coords
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");

        let points = series
            .points
            .iter()
            .zip(&coords)
            .map(|(point, (x, y))| LinePoint {
                x: format!("{x:.1}"),
                y: format!("{y:.1}"),
                tooltip: format!("{}: {}", point.date, format_thousands(i128::from(point.value))),
                tick: point.date.format("%m-%d").to_string(),
            })
            .collect();

        let baseline = SVG_PAD_TOP + plot_h;
        LineChartTemplate {
            name: &series.name,
            view_box: format!("0 0 {SVG_WIDTH} {SVG_HEIGHT}"),
            axis: LineAxis {
                x1: format!("{SVG_PAD_LEFT}"),
                x2: format!("{:.1}", SVG_WIDTH - SVG_PAD_RIGHT),
                y: format!("{baseline:.1}"),
                tick_y: format!("{:.1}", SVG_HEIGHT - 8.0),
                max_label_y: format!("{:.1}", SVG_PAD_TOP + 4.0),
                max_label: format_thousands(i128::from(series.max_value())),
            },
            polyline,
            points,
        }
        .render()
    }

    fn metric(&self, label: &str, value: &str) -> Self::Output {
        MetricTemplate { label, value }.render()
    }
}

// =============================================================================
// Terminal
// =============================================================================

/// Chart text for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalCharts<'a> {
    theme: &'a ThemeConfig,
    styled: bool,
}

impl<'a> TerminalCharts<'a> {
    /// `styled` selects ANSI output; otherwise plain text.
    #[must_use]
    pub const fn new(theme: &'a ThemeConfig, styled: bool) -> Self {
        Self { theme, styled }
    }

    fn finish(&self, component: &impl Renderable) -> String {
        if self.styled {
            component.render()
        } else {
            component.render_plain()
        }
    }
}

impl ChartRenderer for TerminalCharts<'_> {
    type Output = String;

    fn bar_chart(&self, data: &[LeaderboardEntry], x_field: &str, y_field: &str) -> String {
        let caption = format!("{x_field} / {y_field}");
        self.finish(&LeaderboardBars::new(&caption, data, self.theme))
    }

    fn line_chart(&self, series: &TimeSeries) -> String {
        self.finish(&Sparkline::new(series, self.theme))
    }

    fn metric(&self, label: &str, value: &str) -> String {
        if !self.styled {
            return format!("{label}: {value}");
        }
        let segments = [
            Segment::styled(format!("{label}: "), self.theme.muted.clone()),
            Segment::styled(value.to_string(), self.theme.count.clone()),
        ];
        segments_to_string(&segments, true, self.theme.color_depth)
    }
}
