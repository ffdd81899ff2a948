//! Layout helpers for rich output components.

use unicode_width::UnicodeWidthStr;

use crate::rich::ThemeConfig;
use rich_rust::prelude::*;

/// Terminal columns occupied by `text` (CJK characters take two).
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad `text` with spaces on the right to `width` columns.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

/// Pad `text` with spaces on the left to `width` columns.
#[must_use]
pub fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(pad))
}

/// A label on the left and a value pushed to the right edge of `width`.
#[must_use]
pub fn spread(label: &str, value: &str, width: usize) -> String {
    let gap = width
        .saturating_sub(display_width(label) + display_width(value))
        .max(1);
    format!("{label}{}{value}", " ".repeat(gap))
}

/// Segments for a label/value row spread across `width` columns.
#[must_use]
pub fn row_segments(
    label: &str,
    value: &str,
    width: usize,
    theme: &ThemeConfig,
) -> Vec<Segment<'static>> {
    let gap = width
        .saturating_sub(display_width(label) + display_width(value))
        .max(1);
    vec![
        Segment::styled(label.to_string(), theme.muted.clone()),
        Segment::plain(" ".repeat(gap)),
        Segment::styled(value.to_string(), theme.count.clone()),
    ]
}

/// Number of filled cells for `percent` (clamped to 0..=100) of `width`.
#[must_use]
pub fn filled_cells(percent: f64, width: usize) -> usize {
    #[allow(clippy::cast_precision_loss)] // width is small
    let width_f = width as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0-100
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width_f).round() as usize;
    filled.min(width)
}
