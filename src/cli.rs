use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Terminal image feed: attach an image, caption it, like and comment.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "snapfeed", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/snapfeed/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name shown as the author of your posts and comments
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// Log file (default: <cache dir>/snapfeed/snapfeed.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "snapfeed=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(config)
    }

    /// Apply overrides to `config` and validate the result.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(username) = &self.username {
            config.profile.username = username.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
