//! Per-test logger with phases and timing.
//!
//! Lines go to stderr (shown with `--nocapture`). `TEST_LOG_JSON=1` switches
//! to one JSON object per line.
#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Instant;

use serde::Serialize;

#[derive(Serialize)]
struct LogEntry<'a> {
    test: &'a str,
    phase: &'a str,
    message: &'a str,
    elapsed_ms: u128,
}

pub struct TestLogger {
    test_name: String,
    start_time: Instant,
    current_phase: Mutex<String>,
    json: bool,
}

impl TestLogger {
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        let json = std::env::var("TEST_LOG_JSON")
            .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        let logger = Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
            current_phase: Mutex::new("init".to_string()),
            json,
        };
        logger.info("Test starting");
        logger
    }

    /// Set the current phase (setup, execute, verify).
    pub fn phase(&self, phase: &str) {
        if let Ok(mut current) = self.current_phase.lock() {
            *current = phase.to_string();
        }
    }

    pub fn info(&self, message: &str) {
        let phase = self
            .current_phase
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default();
        let elapsed_ms = self.start_time.elapsed().as_millis();

        if self.json {
            let entry = LogEntry {
                test: &self.test_name,
                phase: &phase,
                message,
                elapsed_ms,
            };
            if let Ok(line) = serde_json::to_string(&entry) {
                eprintln!("{line}");
            }
        } else {
            eprintln!("[{}:{phase}] +{elapsed_ms}ms {message}", self.test_name);
        }
    }

    pub fn finish_ok(&self) {
        self.phase("done");
        self.info("PASSED");
    }
}
