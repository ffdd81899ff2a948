//! Core data models, quota formatting and dashboard assembly.

pub mod dashboard;
pub mod logging;
pub mod models;
pub mod provider;
pub mod quota;

pub use dashboard::{DashboardOptions, build_dashboard, summarize};
pub use models::{
    CardSlot, ColorTier, Dashboard, DataSource, DateRange, LeaderboardEntry, NamedQuota, OrgInfo,
    QuotaRecord, RobotOutput, SummaryMetric, TimeSeries, TrendPoint,
};
pub use provider::{DataProvider, StaticDataProvider};
pub use quota::{Accent, QuotaCard};
