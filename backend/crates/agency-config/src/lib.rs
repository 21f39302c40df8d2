mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

/// Backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:7060";
pub const CONFIG_DIR_ENV: &str = "AGENCY_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".agency";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
