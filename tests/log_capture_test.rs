//! Checks the events the library emits while building and rendering.

use charboard::core::dashboard::{DashboardOptions, build_dashboard};
use charboard::core::provider::StaticDataProvider;
use charboard::test_utils::{
    make_test_dashboard_with_quotas, make_test_named_quota, make_test_zero_total_quota,
};

mod common;
use common::log_capture::TestLogCapture;

#[test]
fn build_logs_card_count() {
    let capture = TestLogCapture::start();

    let _ = build_dashboard(&StaticDataProvider::builtin(), &DashboardOptions::default());

    capture.assert_logged_at_level(tracing::Level::DEBUG, "Built dashboard");
    capture.assert_field_logged("cards", "3");
    capture.assert_field_logged("source", "total");
    capture.assert_no_errors();
}

#[test]
fn invalid_card_is_not_an_error_event() {
    let capture = TestLogCapture::start();

    let dashboard = make_test_dashboard_with_quotas(vec![
        make_test_named_quota("ok", 1, 4),
        make_test_zero_total_quota("empty"),
    ]);

    assert_eq!(dashboard.invalid_card_count(), 1);
    capture.assert_logged("Built dashboard");
    capture.assert_no_errors();
}

#[test]
#[should_panic(expected = "Unexpected errors")]
fn capture_sees_errors() {
    let capture = TestLogCapture::start();
    tracing::error!("Something went wrong");
    capture.assert_no_errors();
}
