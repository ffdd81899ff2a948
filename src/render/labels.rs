//! Captions shared by the page renderers.

/// Section and widget captions.
pub const EXPANDER_LABEL: &str = "日期範圍設定與環境資訊";
pub const START_DATE_LABEL: &str = "開始日期";
pub const END_DATE_LABEL: &str = "結束日期";
pub const QUOTA_SECTION: &str = "字元額度總覽";
pub const ANALYSIS_SECTION: &str = "使用量深度分析";
pub const SOURCE_LABEL: &str = "數據來源:";
pub const USERS_HEADING: &str = "使用者排行榜";
pub const BOTS_HEADING: &str = "AI Bots 使用量排行榜";
pub const TREND_HEADING: &str = "字元數使用量變化趨勢";
pub const SUMMARY_HEADING: &str = "使用量統計摘要";
pub const CONCLUSION_HEADING: &str = "分析結論";

/// Chart field captions.
pub const USER_FIELD: &str = "使用者";
pub const USER_VALUE_FIELD: &str = "使用字元數";
pub const BOT_FIELD: &str = "AI Bot";
pub const BOT_VALUE_FIELD: &str = "使用量";

/// Shown when a date bound is open.
pub const UNSET_DATE: &str = "未設定";
