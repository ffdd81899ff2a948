//! Quota card widget for the TUI dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::core::models::CardSlot;
use crate::core::quota::{Accent, QuotaCard};

const CYAN: Color = Color::Rgb(0x22, 0xd3, 0xee);
const GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
const SLATE: Color = Color::Rgb(0x33, 0x41, 0x55);
const MUTED: Color = Color::Rgb(0x64, 0x74, 0x8b);
const RED: Color = Color::Rgb(0xf8, 0x71, 0x71);

/// Bar color for a quota accent.
#[must_use]
pub const fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Success => GREEN,
        Accent::Info => CYAN,
    }
}

/// A bordered panel with a quota's rows and gauge, or its error.
pub struct QuotaPanel<'a> {
    slot: &'a CardSlot,
}

impl<'a> QuotaPanel<'a> {
    #[must_use]
    pub const fn new(slot: &'a CardSlot) -> Self {
        Self { slot }
    }

    fn rows(card: &QuotaCard) -> Vec<Line<'static>> {
        card.rows()
            .into_iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{}  ", row.label), Style::default().fg(MUTED)),
                    Span::styled(row.value, Style::default().add_modifier(Modifier::BOLD)),
                ])
            })
            .collect()
    }

    fn render_card(card: &QuotaCard, inner: Rect, buf: &mut ratatui::buffer::Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Rows
                Constraint::Length(1), // Gauge
                Constraint::Min(1),    // Reset date
            ])
            .split(inner);

        Paragraph::new(Self::rows(card)).render(chunks[0], buf);

        let color = accent_color(card.accent);
        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(SLATE))
            .ratio(card.bar_fill() / 100.0)
            .label(Span::styled(
                format!("{}%", card.percentage_label()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            card.reset_date.clone(),
            Style::default().fg(MUTED),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .render(chunks[2], buf);
    }
}

impl Widget for QuotaPanel<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let border = match self.slot {
            CardSlot::Ready { .. } => SLATE,
            CardSlot::Invalid { .. } => RED,
        };
        let block = Block::default()
            .title(format!(" {} ", self.slot.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.slot {
            CardSlot::Ready { card, .. } => Self::render_card(card, inner, buf),
            CardSlot::Invalid { message, .. } => {
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        "無法顯示額度",
                        Style::default().fg(RED).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(message.clone(), Style::default().fg(MUTED))),
                ])
                .wrap(ratatui::widgets::Wrap { trim: true })
                .render(inner, buf);
            }
        }
    }
}
