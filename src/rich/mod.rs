//! Rich output module - wraps rich_rust for terminal dashboards.
//!
//! The safety gates here decide when styled terminal output is allowed.
//! Anything piped, redirected, or requested in a machine format gets plain
//! text, so scripts and CI logs never see ANSI escape codes.
//!
//! ## Theme System
//!
//! - **default**: Slate/cyan palette matching the HTML page
//! - **minimal**: Bold only, no colors
//! - **high-contrast**: Bold, high-contrast colors
//!
//! Theme selection priority:
//! 1. Explicit theme name
//! 2. Environment variable `CHARBOARD_THEME`
//! 3. Default theme

pub mod components;

use crate::cli::args::OutputFormat;
use crate::core::quota::Accent;
use crate::util::env as env_util;
use regex::Regex;
use std::sync::LazyLock;

pub use rich_rust::prelude::*;
use rich_rust::ColorSystem;

pub const THEME_ENV: &str = "CHARBOARD_THEME";
pub const PLAIN_ENV: &str = "CHARBOARD_PLAIN";

// =============================================================================
// Color Depth Detection
// =============================================================================

/// Terminal color capability level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorDepth {
    /// Plain text only (NO_COLOR set or TERM=dumb).
    NoColor,
    /// Basic 8/16 colors.
    #[default]
    Basic,
    /// 256-color palette (xterm-256color).
    Extended,
    /// 24-bit RGB (truecolor).
    TrueColor,
}

impl ColorDepth {
    /// rich_rust color system for this depth.
    #[must_use]
    pub const fn color_system(self) -> ColorSystem {
        match self {
            Self::NoColor | Self::Basic => ColorSystem::Standard,
            Self::Extended | Self::TrueColor => ColorSystem::TrueColor,
        }
    }
}

/// Detect terminal color capabilities.
#[must_use]
pub fn detect_color_depth() -> ColorDepth {
    if std::env::var("NO_COLOR").is_ok() {
        tracing::debug!(reason = "NO_COLOR", "Color depth: NoColor");
        return ColorDepth::NoColor;
    }

    if let Ok(colorterm) = std::env::var("COLORTERM") {
        if colorterm == "truecolor" || colorterm == "24bit" {
            tracing::debug!(reason = "COLORTERM", colorterm = %colorterm, "Color depth: TrueColor");
            return ColorDepth::TrueColor;
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        if term.contains("256color") {
            tracing::debug!(reason = "TERM", term = %term, "Color depth: Extended");
            return ColorDepth::Extended;
        }
        if term == "dumb" {
            tracing::debug!(reason = "TERM=dumb", "Color depth: NoColor");
            return ColorDepth::NoColor;
        }
    }

    tracing::debug!(reason = "default", "Color depth: Basic");
    ColorDepth::Basic
}

// =============================================================================
// Theme Configuration
// =============================================================================

/// Complete theme configuration.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Theme name identifier.
    pub name: String,

    /// Page title.
    pub primary: Style,
    /// Section headings.
    pub secondary: Style,
    /// Error text.
    pub error: Style,
    /// Labels, footers, captions.
    pub muted: Style,

    /// Card title style.
    pub panel_title: Style,
    /// Card border style.
    pub panel_border: Style,
    /// Border of a card that failed to format.
    pub panel_error_border: Style,

    /// Numeric values on cards and charts.
    pub count: Style,
    /// Unfilled part of bars.
    pub bar_track: Style,
    /// Bars and percentage text with the neutral accent.
    pub accent_info: Style,
    /// Bars and percentage text with the success accent.
    pub accent_success: Style,

    /// Detected color depth.
    pub color_depth: ColorDepth,
}

impl ThemeConfig {
    /// Style for a quota accent.
    #[must_use]
    pub const fn accent(&self, accent: Accent) -> &Style {
        match accent {
            Accent::Success => &self.accent_success,
            Accent::Info => &self.accent_info,
        }
    }
}

// =============================================================================
// Built-in Themes
// =============================================================================

/// Foreground style for a color name or hex code. Unparseable colors leave
/// the text unstyled.
#[must_use]
pub fn fg(name: &str) -> Style {
    Color::parse(name).map_or_else(|_| Style::new(), |color| Style::new().color(color))
}

/// Default theme: the HTML page's slate/cyan palette.
#[must_use]
pub fn create_default_theme() -> ThemeConfig {
    ThemeConfig {
        name: "default".to_string(),

        primary: fg("#f8fafc").bold(),
        secondary: fg("#cbd5e1").bold(),
        error: fg("#f87171").bold(),
        muted: fg("#64748b"),

        panel_title: fg("#ffffff").bold(),
        panel_border: fg("#334155"),
        panel_error_border: fg("#f87171"),

        count: fg("#ffffff"),
        bar_track: fg("#334155"),
        accent_info: fg(Accent::Info.text_color()).bold(),
        accent_success: fg(Accent::Success.text_color()).bold(),

        color_depth: detect_color_depth(),
    }
}

/// Minimal theme with subtle styling (bold only, no colors).
#[must_use]
pub fn create_minimal_theme() -> ThemeConfig {
    ThemeConfig {
        name: "minimal".to_string(),

        primary: Style::new().bold(),
        secondary: Style::new().bold(),
        error: Style::new().bold(),
        muted: Style::new().dim(),

        panel_title: Style::new().bold(),
        panel_border: Style::new(),
        panel_error_border: Style::new().bold(),

        count: Style::new(),
        bar_track: Style::new().dim(),
        accent_info: Style::new().bold(),
        accent_success: Style::new().bold(),

        color_depth: detect_color_depth(),
    }
}

/// High-contrast theme for accessibility.
#[must_use]
pub fn create_high_contrast_theme() -> ThemeConfig {
    ThemeConfig {
        name: "high-contrast".to_string(),

        primary: fg("white").bold(),
        secondary: fg("white").bold(),
        error: fg("red").bold(),
        muted: fg("white"),

        panel_title: fg("white").bold(),
        panel_border: fg("white").bold(),
        panel_error_border: fg("red").bold(),

        count: fg("white").bold(),
        bar_track: fg("white"),
        accent_info: fg("cyan").bold(),
        accent_success: fg("green").bold(),

        color_depth: detect_color_depth(),
    }
}

/// Get theme by name with alias support.
#[must_use]
pub fn theme_by_name(name: &str) -> ThemeConfig {
    match name.trim().to_lowercase().as_str() {
        "default" => create_default_theme(),
        "minimal" | "min" => create_minimal_theme(),
        "high-contrast" | "highcontrast" | "hc" => create_high_contrast_theme(),
        unknown => {
            tracing::warn!(theme = %unknown, "Unknown theme, using default");
            create_default_theme()
        }
    }
}

/// Load the theme: explicit name, then `CHARBOARD_THEME`, then default.
#[must_use]
pub fn get_theme_config(theme_arg: Option<&str>) -> ThemeConfig {
    if let Some(name) = theme_arg {
        tracing::debug!(source = "argument", theme = %name, "Theme selected");
        return theme_by_name(name);
    }

    if let Ok(name) = std::env::var(THEME_ENV) {
        if !name.trim().is_empty() {
            tracing::debug!(
                source = "env_var",
                theme = %name,
                "Theme selected via CHARBOARD_THEME"
            );
            return theme_by_name(&name);
        }
    }

    tracing::debug!(source = "default", "Using default theme");
    create_default_theme()
}

// =============================================================================
// Safety Gates
// =============================================================================

/// Regex for stripping rich markup tags - compiled once.
///
/// Matches `[bold]`, `[red]`, `[#ff0000]`, `[rgb(255,0,0)]`, `[/]` and
/// combinations, but not array indices like `[0]`.
static MARKUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[/?[a-zA-Z_#][a-zA-Z0-9_# (),]*\]").expect("markup regex is valid")
});

/// Regex for stripping ANSI escape sequences.
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI regex is valid"));

/// Central safety gate - determines if rich output is allowed.
///
/// Returns `false` (plain output) when ANY of these conditions are true:
/// 1. `format` is not `Human`
/// 2. `--no-color` flag is set
/// 3. `NO_COLOR` env var is set (any value, per <https://no-color.org/>)
/// 4. `CHARBOARD_PLAIN` env var is set
/// 5. stdout is not a TTY (piped or redirected)
/// 6. `TERM=dumb`
/// 7. `CI` env var is set
#[must_use]
pub fn should_use_rich_output(format: OutputFormat, no_color_flag: bool) -> bool {
    let reason = if format != OutputFormat::Human {
        Some("robot_mode")
    } else if no_color_flag {
        Some("no_color_flag")
    } else if std::env::var("NO_COLOR").is_ok() {
        Some("no_color_env")
    } else if std::env::var(PLAIN_ENV).is_ok() {
        Some("charboard_plain")
    } else if !env_util::stdout_is_tty() {
        Some("not_tty")
    } else if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
        Some("term_dumb")
    } else if std::env::var("CI").is_ok() {
        Some("ci_environment")
    } else {
        None
    };

    match reason {
        Some(reason) => {
            tracing::debug!(reason, decision = "disabled", "Rich output DISABLED");
            false
        }
        None => {
            tracing::debug!(decision = "enabled", "Rich output ENABLED");
            true
        }
    }
}

/// Remove rich markup tags from text, preserving content.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    MARKUP_REGEX.replace_all(text, "").to_string()
}

/// Strip markup AND any ANSI escape codes that might have leaked through.
#[must_use]
pub fn strip_all_formatting(text: &str) -> String {
    let no_markup = strip_markup(text);
    ANSI_REGEX.replace_all(&no_markup, "").to_string()
}

/// Check if text contains ANSI escape codes.
#[must_use]
pub fn contains_ansi(text: &str) -> bool {
    text.contains("\x1b[")
}

/// Convert segments to a string, applying styles when `styled` is set.
#[must_use]
pub fn segments_to_string(segments: &[Segment<'_>], styled: bool, depth: ColorDepth) -> String {
    let color_system = depth.color_system();
    segments
        .iter()
        .map(|seg| match &seg.style {
            Some(style) if styled && depth != ColorDepth::NoColor => {
                style.render(&seg.text, color_system)
            }
            _ => seg.text.to_string(),
        })
        .collect()
}

/// Trait for components that can render in both rich and plain modes.
pub trait Renderable {
    /// Render with rich formatting (may contain ANSI codes).
    fn render(&self) -> String;

    /// Render as plain text (MUST NOT contain ANSI codes or markup).
    fn render_plain(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[allow(unsafe_code)]
    fn with_env_var(key: &str, value: &str, f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let prior = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        f();
        match prior {
            Some(val) => unsafe {
                std::env::set_var(key, val);
            },
            None => unsafe {
                std::env::remove_var(key);
            },
        }
    }

    #[test]
    fn color_parsing() {
        assert!(Color::parse("#22d3ee").is_ok());
        assert!(Color::parse("red").is_ok());
    }

    #[traced_test]
    #[test]
    fn machine_formats_disable_rich() {
        for format in [OutputFormat::Json, OutputFormat::Md, OutputFormat::Html] {
            assert!(!should_use_rich_output(format, false));
        }
        assert!(logs_contain("robot_mode"));
        assert!(logs_contain("DISABLED"));
    }

    #[traced_test]
    #[test]
    fn no_color_flag_disables_rich() {
        assert!(!should_use_rich_output(OutputFormat::Human, true));
        assert!(logs_contain("no_color_flag"));
    }

    #[traced_test]
    #[test]
    fn no_color_empty_value_still_disables() {
        with_env_var("NO_COLOR", "", || {
            assert!(!should_use_rich_output(OutputFormat::Human, false));
            assert!(logs_contain("no_color_env"));
        });
    }

    #[test]
    fn plain_env_disables_rich() {
        with_env_var(PLAIN_ENV, "1", || {
            assert!(!should_use_rich_output(OutputFormat::Human, false));
        });
    }

    #[test]
    fn strip_markup_variants() {
        assert_eq!(strip_markup("[bold]hi[/bold]"), "hi");
        assert_eq!(strip_markup("[#ff0000]red[/]"), "red");
        assert_eq!(strip_markup("[bold red on white]x[/]"), "x");
        assert_eq!(strip_markup("items[0]"), "items[0]");
    }

    #[test]
    fn strip_all_formatting_removes_ansi() {
        let text = "\x1b[1m[bold]x[/bold]\x1b[0m";
        let plain = strip_all_formatting(text);
        assert_eq!(plain, "x");
        assert!(!contains_ansi(&plain));
    }

    #[test]
    fn segments_render_plain_when_unstyled() {
        let segments = vec![
            Segment::styled("70.0%", Style::new().bold()),
            Segment::plain(" used"),
        ];
        assert_eq!(
            segments_to_string(&segments, false, ColorDepth::TrueColor),
            "70.0% used"
        );
        assert!(contains_ansi(&segments_to_string(
            &segments,
            true,
            ColorDepth::TrueColor
        )));
    }

    #[test]
    fn theme_aliases() {
        assert_eq!(theme_by_name("hc").name, "high-contrast");
        assert_eq!(theme_by_name("MIN").name, "minimal");
        assert_eq!(theme_by_name("nope").name, "default");
    }

    #[test]
    fn theme_from_env() {
        with_env_var(THEME_ENV, "minimal", || {
            assert_eq!(get_theme_config(None).name, "minimal");
            assert_eq!(get_theme_config(Some("hc")).name, "high-contrast");
        });
    }

    #[test]
    fn accent_styles_differ() {
        let theme = create_default_theme();
        assert_ne!(
            format!("{:?}", theme.accent(Accent::Success)),
            format!("{:?}", theme.accent(Accent::Info))
        );
    }
}
