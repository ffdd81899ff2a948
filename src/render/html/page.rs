//! Full dashboard page.

use askama::Template;

use super::render_card;
use crate::core::models::Dashboard;
use crate::error::Result;
use crate::render::chart::{ChartRenderer, HtmlCharts};
use crate::render::labels::*;

/// Section captions handed to the page template.
#[derive(Debug, Clone, Copy)]
struct Captions {
    expander: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    quota_section: &'static str,
    analysis_section: &'static str,
    source: &'static str,
    users: &'static str,
    bots: &'static str,
    trend: &'static str,
    summary: &'static str,
    conclusion: &'static str,
}

const CAPTIONS: Captions = Captions {
    expander: EXPANDER_LABEL,
    start_date: START_DATE_LABEL,
    end_date: END_DATE_LABEL,
    quota_section: QUOTA_SECTION,
    analysis_section: ANALYSIS_SECTION,
    source: SOURCE_LABEL,
    users: USERS_HEADING,
    bots: BOTS_HEADING,
    trend: TREND_HEADING,
    summary: SUMMARY_HEADING,
    conclusion: CONCLUSION_HEADING,
};

/// Standalone HTML document for a dashboard.
///
/// Cards and charts are rendered from their own templates first and slotted
/// into the page as trusted fragments.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    dashboard: &'a Dashboard,
    captions: Captions,
    cards: Vec<String>,
    users_chart: String,
    bots_chart: String,
    trend_chart: String,
    metrics: Vec<String>,
}

impl<'a> PageTemplate<'a> {
    /// Render the fragments for `dashboard`.
    ///
    /// # Errors
    ///
    /// Returns an error if a card or chart template fails to render.
    pub fn new(dashboard: &'a Dashboard) -> askama::Result<Self> {
        let charts = HtmlCharts;
        Ok(Self {
            dashboard,
            captions: CAPTIONS,
            cards: dashboard
                .cards
                .iter()
                .map(render_card)
                .collect::<askama::Result<_>>()?,
            users_chart: charts.bar_chart(&dashboard.users, USER_FIELD, USER_VALUE_FIELD)?,
            bots_chart: charts.bar_chart(&dashboard.bots, BOT_FIELD, BOT_VALUE_FIELD)?,
            trend_chart: charts.line_chart(&dashboard.trend)?,
            metrics: dashboard
                .summary
                .iter()
                .map(|m| charts.metric(&m.label, &m.value))
                .collect::<askama::Result<_>>()?,
        })
    }

    fn start_date(&self) -> String {
        date_or_unset(self.dashboard.range.start)
    }

    fn end_date(&self) -> String {
        date_or_unset(self.dashboard.range.end)
    }
}

fn date_or_unset(value: Option<chrono::NaiveDate>) -> String {
    value.map_or_else(|| UNSET_DATE.to_string(), |d| d.to_string())
}

/// Serialize the dashboard as a standalone HTML document.
///
/// # Errors
///
/// Returns [`DashboardError::Template`](crate::error::DashboardError::Template)
/// if a template fails to render.
pub fn render_page(dashboard: &Dashboard) -> Result<String> {
    let html = PageTemplate::new(dashboard)?.render()?;
    Ok(html)
}
