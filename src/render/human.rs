//! Human-readable dashboard output using rich_rust.
//!
//! Quota cards become bordered panels, leaderboards become bar lists and the
//! trend a sparkline. When rich output is disabled every component falls
//! back to its plain rendering.

use crate::cli::args::OutputFormat;
use crate::core::models::Dashboard;
use crate::error::Result;
use crate::render::chart::{ChartRenderer, TerminalCharts};
use crate::render::labels::{
    ANALYSIS_SECTION, BOT_FIELD, BOT_VALUE_FIELD, BOTS_HEADING, CONCLUSION_HEADING,
    END_DATE_LABEL, QUOTA_SECTION, SOURCE_LABEL, START_DATE_LABEL, SUMMARY_HEADING, TREND_HEADING,
    UNSET_DATE, USER_FIELD, USER_VALUE_FIELD, USERS_HEADING,
};
use crate::rich::components::QuotaCardPanel;
use crate::rich::{
    Renderable, Segment, Style, ThemeConfig, get_theme_config, segments_to_string,
    should_use_rich_output,
};

/// Width of each quota card panel.
const CARD_WIDTH: usize = 44;

/// Render the dashboard for a terminal, honouring the rich-output gates.
pub fn render_dashboard(dashboard: &Dashboard, no_color: bool) -> Result<String> {
    let styled = should_use_rich_output(OutputFormat::Human, no_color);
    let theme = get_theme_config(None);
    Ok(render_dashboard_with(dashboard, &theme, styled))
}

/// Render with an explicit theme and styling decision.
#[must_use]
pub fn render_dashboard_with(dashboard: &Dashboard, theme: &ThemeConfig, styled: bool) -> String {
    let line = |text: &str, style: &Style| -> String {
        segments_to_string(
            &[Segment::styled(text.to_string(), style.clone())],
            styled,
            theme.color_depth,
        )
    };
    let heading = |text: &str| line(text, &theme.secondary);
    let charts = TerminalCharts::new(theme, styled);
    let mut out: Vec<String> = Vec::new();

    out.push(line(&dashboard.title, &theme.primary));
    out.push(line(&dashboard.subtitle, &theme.muted));
    out.push(String::new());

    let date = |d: Option<chrono::NaiveDate>| {
        d.map_or_else(|| UNSET_DATE.to_string(), |d| d.to_string())
    };
    out.push(line(
        &format!(
            "{START_DATE_LABEL}: {} | {END_DATE_LABEL}: {}",
            date(dashboard.range.start),
            date(dashboard.range.end)
        ),
        &theme.muted,
    ));
    out.push(line(&dashboard.org.summary_line(), &theme.muted));
    out.push(String::new());

    out.push(line(QUOTA_SECTION, &theme.primary));
    for slot in &dashboard.cards {
        let panel = QuotaCardPanel::new(slot, theme).width(CARD_WIDTH);
        out.push(if styled {
            panel.render()
        } else {
            panel.render_plain()
        });
    }
    out.push(String::new());

    out.push(line(ANALYSIS_SECTION, &theme.primary));
    out.push(format!("{SOURCE_LABEL} {}", dashboard.source.label()));
    out.push(String::new());

    out.push(heading(USERS_HEADING));
    out.push(charts.bar_chart(&dashboard.users, USER_FIELD, USER_VALUE_FIELD));
    out.push(String::new());

    out.push(heading(BOTS_HEADING));
    out.push(charts.bar_chart(&dashboard.bots, BOT_FIELD, BOT_VALUE_FIELD));
    out.push(String::new());

    out.push(heading(TREND_HEADING));
    out.push(charts.line_chart(&dashboard.trend));
    out.push(String::new());

    out.push(heading(SUMMARY_HEADING));
    for metric in &dashboard.summary {
        out.push(format!("  {}", charts.metric(&metric.label, &metric.value)));
    }
    out.push(String::new());

    out.push(heading(CONCLUSION_HEADING));
    out.push(dashboard.analysis.clone());

    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}
