use crate::commands::Commands;

use agency_config::{Config, ConfigErrorResult, LogLevel};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "agency")]
#[command(about = "Command-line client for the agency project backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides AGENCY_API_BASE_URL and config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        LogLevel(match arg {
            LogLevelArg::Off => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        })
    }
}

impl Cli {
    /// Layer command-line flags over a loaded config, then validate the result.
    ///
    /// Precedence: flag > env > config.toml > default.
    pub fn resolve_config(&self, mut config: Config) -> ConfigErrorResult<Config> {
        config.apply_server_override(self.server.clone());

        if let Some(level) = self.log_level {
            config.logging.level = level.into();
        }

        config.validate()?;
        Ok(config)
    }
}
