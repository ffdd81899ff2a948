#![allow(dead_code)]

use assert_cmd::Command;
use charboard::test_utils::TestDir;

/// Environment variables that would leak the caller's settings into a run.
const ISOLATED_VARS: &[&str] = &[
    "CHARBOARD_CONFIG",
    "CHARBOARD_FORMAT",
    "CHARBOARD_NO_COLOR",
    "CHARBOARD_PRETTY",
    "CHARBOARD_PORT",
    "CHARBOARD_LOG",
    "CHARBOARD_LOG_FORMAT",
    "CHARBOARD_LOG_FILE",
    "CHARBOARD_THEME",
    "CHARBOARD_PLAIN",
    "NO_COLOR",
    "RUST_LOG",
];

/// The binary with a clean environment and no config.
#[allow(deprecated)]
pub fn charboard() -> Command {
    let mut cmd = Command::cargo_bin("charboard").expect("binary builds");
    for var in ISOLATED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// The binary reading `config` from a file in `dir`.
pub fn charboard_with_config(dir: &TestDir, config: &str) -> Command {
    let path = dir.create_file("config.toml", config);
    let mut cmd = charboard();
    cmd.arg("--config").arg(path);
    cmd
}

/// The binary on the built-in data (an empty config file).
pub fn charboard_builtin(dir: &TestDir) -> Command {
    charboard_with_config(dir, "")
}
