//! Configuration storage.

pub mod config;
pub mod paths;

pub use config::{
    Config, ConfigSource, ConfigSources, DEFAULT_HOST, DEFAULT_PORT, ENV_CONFIG, ENV_FORMAT,
    ENV_NO_COLOR, ENV_NO_COLOR_STD, ENV_PORT, ENV_PRETTY, ResolvedConfig,
};
pub use paths::AppPaths;
