//! Dashboard widget for the TUI.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Sparkline, Widget, Wrap},
};

use crate::core::models::{Dashboard, LeaderboardEntry};
use crate::render::labels::{
    BOTS_HEADING, CONCLUSION_HEADING, SOURCE_LABEL, SUMMARY_HEADING, TREND_HEADING, USERS_HEADING,
};
use crate::util::format::format_thousands;
use crate::util::time::format_relative_time;

use super::quota_panel::QuotaPanel;

const CYAN: Color = Color::Rgb(0x22, 0xd3, 0xee);
const MUTED: Color = Color::Rgb(0x64, 0x74, 0x8b);
const SLATE: Color = Color::Rgb(0x33, 0x41, 0x55);

/// The full-screen dashboard layout.
pub struct DashboardView<'a> {
    dashboard: &'a Dashboard,
    /// Status line (e.g. the outcome of the last reload).
    status: Option<&'a str>,
    loaded_at: DateTime<Utc>,
    show_help: bool,
}

impl<'a> DashboardView<'a> {
    #[must_use]
    pub const fn new(
        dashboard: &'a Dashboard,
        status: Option<&'a str>,
        loaded_at: DateTime<Utc>,
        show_help: bool,
    ) -> Self {
        Self {
            dashboard,
            status,
            loaded_at,
            show_help,
        }
    }

    fn section(title: &str) -> Block<'static> {
        Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SLATE))
    }

    fn render_header(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", self.dashboard.title),
                Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{}  ", self.dashboard.subtitle),
                Style::default().fg(MUTED),
            ),
            Span::styled("[?] Help  ", Style::default().fg(MUTED)),
            Span::styled("[r] Reload  ", Style::default().fg(MUTED)),
            Span::styled("[q] Quit", Style::default().fg(MUTED)),
        ]);
        Paragraph::new(title).render(area, buf);
    }

    fn render_context(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} | ", self.dashboard.range.label()),
                Style::default().fg(MUTED),
            ),
            Span::styled(
                format!("{SOURCE_LABEL} {} | ", self.dashboard.source.label()),
                Style::default().fg(MUTED),
            ),
            Span::styled(self.dashboard.org.summary_line(), Style::default().fg(MUTED)),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let count = self.dashboard.cards.len();
        if count == 0 {
            return;
        }
        #[allow(clippy::cast_possible_truncation)] // a handful of cards
        let constraints: Vec<Constraint> = (0..count)
            .map(|_| Constraint::Ratio(1, count as u32))
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (slot, chunk) in self.dashboard.cards.iter().zip(chunks.iter()) {
            QuotaPanel::new(slot).render(*chunk, buf);
        }
    }

    fn bar_chart<'b>(title: &str, entries: &'b [LeaderboardEntry]) -> BarChart<'b> {
        let bars: Vec<Bar<'b>> = entries
            .iter()
            .map(|entry| {
                Bar::default()
                    .value(entry.value)
                    .label(Line::from(entry.label.as_str()))
                    .text_value(format_thousands(i128::from(entry.value)))
                    .style(Style::default().fg(CYAN))
            })
            .collect();

        BarChart::default()
            .block(Self::section(title))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars))
    }

    fn render_trend(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let values: Vec<u64> = self.dashboard.trend.points.iter().map(|p| p.value).collect();
        Sparkline::default()
            .block(Self::section(TREND_HEADING))
            .data(&values)
            .style(Style::default().fg(CYAN))
            .render(chunks[0], buf);

        let span = match (self.dashboard.trend.points.first(), self.dashboard.trend.points.last()) {
            (Some(first), Some(last)) => format!(
                " {} → {}  max {}",
                first.date,
                last.date,
                format_thousands(i128::from(self.dashboard.trend.max_value()))
            ),
            _ => " 無資料".to_string(),
        };
        Paragraph::new(Span::styled(span, Style::default().fg(MUTED))).render(chunks[1], buf);
    }

    fn render_summary(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let mut lines: Vec<Line> = self
            .dashboard
            .summary
            .iter()
            .map(|metric| {
                Line::from(vec![
                    Span::styled(format!("{}: ", metric.label), Style::default().fg(MUTED)),
                    Span::styled(
                        metric.value.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            CONCLUSION_HEADING,
            Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(self.dashboard.analysis.as_str()));

        Paragraph::new(lines)
            .block(Self::section(SUMMARY_HEADING))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let mut spans = vec![Span::styled(
            format!(
                " Loaded {} ({})",
                self.loaded_at.format("%H:%M:%S"),
                format_relative_time(self.loaded_at)
            ),
            Style::default().fg(MUTED),
        )];
        let invalid = self.dashboard.invalid_card_count();
        if invalid > 0 {
            spans.push(Span::styled(
                format!("  ⚠ {invalid} card(s) invalid"),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(status) = self.status {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(status.to_string(), Style::default().fg(Color::Yellow)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Keyboard Shortcuts",
                Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("    r, F5         Reload config file"),
            Line::from("    ?, F1         Toggle this help"),
            Line::from("    q, Esc        Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "  Press any key to close",
                Style::default().fg(MUTED),
            )),
        ];

        let help_width = 44;
        let help_height = 10;
        let x = area.x + (area.width.saturating_sub(help_width)) / 2;
        let y = area.y + (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(x, y, help_width.min(area.width), help_height.min(area.height));

        Clear.render(help_area, buf);
        Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(CYAN)),
            )
            .render(help_area, buf);
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Range, source, org
                Constraint::Length(7), // Quota cards
                Constraint::Min(8),    // Analysis
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_context(chunks[1], buf);
        self.render_cards(chunks[2], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
            .split(chunks[3]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(columns[1]);

        Self::bar_chart(USERS_HEADING, &self.dashboard.users).render(left[0], buf);
        Self::bar_chart(BOTS_HEADING, &self.dashboard.bots).render(left[1], buf);
        self.render_trend(right[0], buf);
        self.render_summary(right[1], buf);

        self.render_footer(chunks[4], buf);

        if self.show_help {
            Self::render_help(area, buf);
        }
    }
}
