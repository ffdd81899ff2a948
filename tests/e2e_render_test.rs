//! E2E tests for the render command.
//!
//! Runs the compiled binary against the built-in data and a small config,
//! checking each output format, the date range and `--output`.

use charboard::test_utils::{TestDir, make_test_config_toml};
use charboard::{assert_contains, assert_no_ansi_codes, assert_not_contains};
use predicates::prelude::*;

mod common;

use common::cmd::{charboard_builtin, charboard_with_config};
use common::logger::TestLogger;

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn default_command_renders_human_dashboard() {
    let log = TestLogger::new("default_command_renders_human_dashboard");
    let dir = TestDir::new();

    log.phase("execute");
    let out = stdout_of(charboard_builtin(&dir).arg("--no-color"));

    log.phase("verify");
    assert_no_ansi_codes!(out);
    assert_contains!(out, "政府AI應用實驗站 測試(lab32)");
    assert_contains!(out, "第一年度額度");
    assert_contains!(out, "70.0%");
    assert_contains!(out, "3,500,000");
    assert_contains!(out, "使用者排行榜");
    assert_contains!(out, "期間總用量: 53.0K");
    log.finish_ok();
}

#[test]
fn json_format_emits_envelope() {
    let dir = TestDir::new();
    let out = stdout_of(charboard_builtin(&dir).args(["render", "--json"]));

    let value = charboard::assert_json_valid!(&out);
    assert_eq!(value["schemaVersion"], "charboard.v1");
    assert_eq!(value["command"], "dashboard");
    assert_eq!(value["meta"]["runtime"], "cli");
    assert_eq!(value["data"]["cards"][0]["key"], "year1");
    assert_eq!(value["data"]["cards"][0]["status"], "ready");
    assert_eq!(value["data"]["users"][0]["label"], "王小明");
    assert!(value["errors"].as_array().unwrap().is_empty());
}

#[test]
fn pretty_json_is_indented() {
    let dir = TestDir::new();
    let out = stdout_of(charboard_builtin(&dir).args(["--format", "json", "--pretty"]));
    assert!(out.starts_with("{\n  "));
}

#[test]
fn markdown_format_lists_cards() {
    let dir = TestDir::new();
    let out = stdout_of(charboard_builtin(&dir).args(["render", "--format", "md"]));

    assert!(out.starts_with("# 政府AI應用實驗站 測試(lab32)"));
    assert_contains!(out, "## 第一年度額度 (year1)");
    assert_contains!(out, "- percentage: 70.0%");
    assert_contains!(out, "1. 文件摘要: 250,000");
}

#[test]
fn html_format_is_standalone_page() {
    let dir = TestDir::new();
    let out = stdout_of(charboard_builtin(&dir).args(["render", "--format", "html"]));

    assert!(out.starts_with("<!DOCTYPE html>"));
    assert_contains!(out, "<style>");
    assert_contains!(out, "class=\"quota-card\"");
    assert_contains!(out, "width: 70.0%;");
    assert_contains!(out, "</html>");
    assert_no_ansi_codes!(out);
}

#[test]
fn config_file_drives_every_section() {
    let dir = TestDir::new();
    let out = stdout_of(charboard_with_config(&dir, &make_test_config_toml()).arg("--no-color"));

    assert_contains!(out, "測試儀表板");
    assert_contains!(out, "主要額度");
    assert_contains!(out, "25.0%");
    assert_contains!(out, "機關代碼: T001");
    assert_contains!(out, "測試結論");
    assert_not_contains!(out, "第一年度額度");
}

#[test]
fn date_range_filters_trend_summary() {
    let dir = TestDir::new();
    let out = stdout_of(charboard_builtin(&dir).args([
        "render",
        "--json",
        "--from",
        "2025-09-02",
        "--to",
        "2025-09-03",
    ]));

    let value = charboard::assert_json_valid!(&out);
    let points = value["data"]["trend"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["date"], "2025-09-02");
    assert_eq!(value["data"]["summary"][0]["value"], "19.7K");
}

#[test]
fn output_file_is_written_without_styling() {
    let dir = TestDir::new();
    let target = dir.file_path("out/board.html");

    charboard_builtin(&dir)
        .args(["render", "--format", "html", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&target).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn zero_total_card_renders_as_error() {
    let dir = TestDir::new();
    let config = r#"
[[quotas]]
key = "broken"
title = "壞掉的額度"
used = 5
total = 0
reset_date = "-"
"#;
    let out = stdout_of(charboard_with_config(&dir, config).args(["render", "--json"]));

    let value = charboard::assert_json_valid!(&out);
    assert_eq!(value["data"]["cards"][0]["status"], "invalid");
    assert!(
        value["errors"][0]
            .as_str()
            .unwrap()
            .starts_with("broken: ")
    );
}

#[test]
fn huge_values_render_without_overflow() {
    let dir = TestDir::new();
    let config = r#"
[[quotas]]
key = "huge"
title = "超大額度"
used = 1152921504606846975
total = 1152921504606846976
reset_date = "-"

[[trend]]
date = "2025-09-01"
value = 9223372036854775807

[[trend]]
date = "2025-09-02"
value = 9223372036854775807

[[trend]]
date = "2025-09-03"
value = 9223372036854775807
"#;
    let out = stdout_of(charboard_with_config(&dir, config).args(["render", "--json"]));

    let value = charboard::assert_json_valid!(&out);
    let card = &value["data"]["cards"][0];
    assert_eq!(card["status"], "ready");
    assert_eq!(card["remaining"], 1);
    assert!(card["percentage"].as_f64().unwrap() < 100.0);
    assert_eq!(value["data"]["summary"][0]["value"], "27670116110564.3M");
}
