//! Reusable rich output components for charboard.
//!
//! Each component wraps rich_rust primitives and implements the
//! `Renderable` trait for both rich and plain text output.
//!
//! ## Components
//!
//! - [`QuotaCardPanel`] - Bordered card for one quota slot
//! - [`UsageBar`] - Clamped progress bar with percentage
//! - [`LeaderboardBars`] - Horizontal bars for a usage ranking
//! - [`Sparkline`] - Tick sparkline for the daily trend

mod formatters;
mod leaderboard;
mod quota_card;
mod sparkline;
mod usage_bar;

pub use formatters::*;
pub use leaderboard::LeaderboardBars;
pub use quota_card::QuotaCardPanel;
pub use sparkline::Sparkline;
pub use usage_bar::UsageBar;
