//! Robot-mode output (JSON and Markdown).
//!
//! Provides stable, token-efficient output for scripts and agents.

use std::fmt::Write;

use crate::core::models::{CardSlot, Dashboard, RobotOutput};
use crate::error::Result;
use crate::render::labels::{
    BOTS_HEADING, CONCLUSION_HEADING, SUMMARY_HEADING, TREND_HEADING, USERS_HEADING,
};
use crate::util::format::format_thousands;

/// Render any serializable value as JSON.
pub fn render_json<T: serde::Serialize>(output: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(output)?)
    } else {
        Ok(serde_json::to_string(output)?)
    }
}

/// Render the dashboard envelope as JSON.
pub fn render_dashboard_json(dashboard: &Dashboard, pretty: bool) -> Result<String> {
    render_json(&RobotOutput::dashboard(dashboard.clone()), pretty)
}

/// Render the dashboard as Markdown.
pub fn render_dashboard_md(dashboard: &Dashboard) -> Result<String> {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", dashboard.title);
    let _ = writeln!(out, "{}\n", dashboard.subtitle);
    let _ = writeln!(out, "- range: {}", dashboard.range.label());
    let _ = writeln!(out, "- source: {}", dashboard.source.cli_name());
    let _ = writeln!(out, "- agency_code: {}", dashboard.org.agency_code);
    let _ = writeln!(out, "- agency_name: {}", dashboard.org.agency_name);
    let _ = writeln!(out, "- hostname: {}\n", dashboard.org.hostname);

    for slot in &dashboard.cards {
        match slot {
            CardSlot::Ready { key, card } => {
                let _ = writeln!(out, "## {} ({key})", card.title);
                let _ = writeln!(out, "- used: {}", format_thousands(i128::from(card.used)));
                let _ = writeln!(out, "- remaining: {}", format_thousands(card.remaining));
                let _ = writeln!(out, "- total: {}", format_thousands(i128::from(card.total)));
                let _ = writeln!(out, "- percentage: {}%", card.percentage_label());
                let _ = writeln!(out, "- reset: {}\n", card.reset_date);
            }
            CardSlot::Invalid {
                key,
                title,
                message,
            } => {
                let _ = writeln!(out, "## {title} ({key})");
                let _ = writeln!(out, "- error: {message}\n");
            }
        }
    }

    for (heading, entries) in [(USERS_HEADING, &dashboard.users), (BOTS_HEADING, &dashboard.bots)] {
        let _ = writeln!(out, "## {heading}");
        for (rank, entry) in entries.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {}: {}",
                rank + 1,
                entry.label,
                format_thousands(i128::from(entry.value))
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "## {TREND_HEADING}");
    for point in &dashboard.trend.points {
        let _ = writeln!(out, "- {}: {}", point.date, format_thousands(i128::from(point.value)));
    }
    out.push('\n');

    let _ = writeln!(out, "## {SUMMARY_HEADING}");
    for metric in &dashboard.summary {
        let _ = writeln!(out, "- {}: {}", metric.label, metric.value);
    }
    out.push('\n');

    let _ = writeln!(out, "## {CONCLUSION_HEADING}\n");
    let _ = writeln!(out, "{}", dashboard.analysis);

    Ok(out)
}
