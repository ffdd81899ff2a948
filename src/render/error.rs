//! Error rendering for charboard.
//!
//! Rich panels with fix suggestions on a terminal, a short plain message
//! elsewhere, and structured JSON for the machine formats.

use crate::cli::args::OutputFormat;
use crate::error::{DashboardError, FixSuggestion};
use crate::rich::{
    Panel, Segment, Text, ThemeConfig, create_default_theme, segments_to_string,
    should_use_rich_output,
};

/// Render an error for stderr.
///
/// JSON and Markdown formats get structured JSON (Markdown always pretty).
/// Human and HTML formats get a rich panel when stderr is a terminal and
/// the rich-output gates allow it, otherwise a plain two-line message.
#[must_use]
pub fn render_error(
    error: &DashboardError,
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
) -> String {
    match format {
        OutputFormat::Json => return render_error_json(error, pretty),
        OutputFormat::Md => return render_error_json(error, true),
        OutputFormat::Human | OutputFormat::Html => {}
    }

    let use_rich = should_use_rich_output(OutputFormat::Human, no_color)
        && crate::util::env::stderr_is_tty();

    if use_rich {
        render_rich(error)
    } else {
        render_simple(error)
    }
}

/// Render error as structured JSON.
#[must_use]
pub fn render_error_json(error: &DashboardError, pretty: bool) -> String {
    let error_json = ErrorJson::from_error(error);
    let rendered = if pretty {
        serde_json::to_string_pretty(&error_json)
    } else {
        serde_json::to_string(&error_json)
    };
    rendered.unwrap_or_else(|_| render_simple(error))
}

// =============================================================================
// Rich Terminal Rendering
// =============================================================================

fn render_rich(error: &DashboardError) -> String {
    let theme = create_default_theme();
    let suggestions = error.fix_suggestions();

    let mut lines: Vec<Vec<Segment<'static>>> = vec![
        vec![
            Segment::styled(error.to_string(), theme.error.clone()),
            Segment::styled(format!(" [{}]", error.error_code()), theme.muted.clone()),
        ],
        Vec::new(),
    ];

    if !suggestions.is_empty() {
        lines.extend(suggestion_lines(&suggestions, &theme));
    }

    if let Some(first) = suggestions.first() {
        if !first.context.is_empty() {
            lines.push(Vec::new());
            lines.push(vec![Segment::styled(
                "Why this happened:".to_string(),
                theme.secondary.clone(),
            )]);
            for line in wrap_text(&first.context, 60) {
                lines.push(vec![Segment::plain(format!("  {line}"))]);
            }
        }
        if let Some(prevention) = &first.prevention {
            lines.push(Vec::new());
            lines.push(vec![Segment::styled(
                "Prevention:".to_string(),
                theme.accent_success.clone(),
            )]);
            for line in wrap_text(prevention, 60) {
                lines.push(vec![Segment::plain(format!("  {line}"))]);
            }
        }
    }

    let panel = Panel::new(lines)
        .title(Text::new(error.category().to_string()))
        .border_style(theme.panel_error_border.clone())
        .padding((1, 2));

    segments_to_string(&panel.render(70), true, theme.color_depth)
}

fn suggestion_lines(
    suggestions: &[FixSuggestion],
    theme: &ThemeConfig,
) -> Vec<Vec<Segment<'static>>> {
    let mut lines = vec![vec![Segment::styled("How to fix:".to_string(), theme.primary.clone())]];
    for (i, suggestion) in suggestions.iter().enumerate() {
        for (j, cmd) in suggestion.commands.iter().enumerate() {
            let prefix = if j == 0 {
                format!("  {}. ", i + 1)
            } else {
                "     Or: ".to_string()
            };
            let style = if cmd.starts_with('#') {
                theme.muted.clone()
            } else {
                theme.accent_info.clone()
            };
            lines.push(vec![Segment::plain(prefix), Segment::styled(cmd.clone(), style)]);
        }
    }
    lines
}

// =============================================================================
// Simple Text Rendering
// =============================================================================

/// Plain error text (no ANSI codes, no box drawing).
fn render_simple(error: &DashboardError) -> String {
    let mut lines = vec![format!("Error [{}]: {}", error.error_code(), error)];

    let fix = error
        .fix_suggestions()
        .into_iter()
        .flat_map(|s| s.commands)
        .find(|cmd| !cmd.starts_with('#'));
    if let Some(cmd) = fix {
        lines.push(format!("Fix: {cmd}"));
    }

    lines.join("\n")
}

// =============================================================================
// JSON Rendering
// =============================================================================

#[derive(serde::Serialize)]
struct ErrorJson {
    error_code: String,
    category: String,
    message: String,
    exit_code: i32,
    suggestions: Vec<SuggestionJson>,
}

#[derive(serde::Serialize)]
struct SuggestionJson {
    commands: Vec<String>,
    context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prevention: Option<String>,
}

impl ErrorJson {
    fn from_error(error: &DashboardError) -> Self {
        Self {
            error_code: error.error_code().to_string(),
            category: error.category().to_string(),
            message: error.to_string(),
            exit_code: error.exit_code().into(),
            suggestions: error
                .fix_suggestions()
                .into_iter()
                .map(|s| SuggestionJson {
                    commands: s.commands,
                    context: s.context,
                    prevention: s.prevention,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Greedy word wrap on whitespace.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
