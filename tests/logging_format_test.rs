//! Integration tests for logging initialization and the log file sink.

use charboard::core::logging::{self, LogFormat, LogLevel, LogSettings};
use charboard::test_utils::TestDir;

mod common;

use common::cmd::charboard_builtin;

#[test]
fn init_accepts_each_format() {
    for format in [LogFormat::Human, LogFormat::Compact, LogFormat::Json] {
        logging::init(&LogSettings {
            level: LogLevel::Debug,
            format,
            file: None,
        });
    }
}

#[test]
fn json_logs_go_to_log_file() {
    let dir = TestDir::new();
    let log_path = dir.file_path("charboard.log");

    charboard_builtin(&dir)
        .env("CHARBOARD_LOG_FILE", &log_path)
        .args(["--json-output", "--log-level", "debug", "render", "--json"])
        .assert()
        .success();

    let logs = std::fs::read_to_string(&log_path).unwrap();
    let built = logs
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|v| v["fields"]["message"] == "Built dashboard")
        .expect("dashboard build is logged");
    assert_eq!(built["fields"]["cards"], 3);
}

#[test]
fn quiet_by_default() {
    let dir = TestDir::new();
    charboard_builtin(&dir)
        .args(["render", "--json"])
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}
