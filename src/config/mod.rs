mod color;
#[expect(clippy::module_inception, reason = "I like it this way")]
mod config;

pub use color::Color;
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};

/// Log target for configuration loading
pub(crate) const LOG_TARGET: &str = "config";
