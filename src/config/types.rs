use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity attached to everything published in this session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Author name for posts and comments (default: "あなた").
    #[serde(default = "default_username")]
    pub username: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// `chrono` format string for post timestamps, rendered in local time.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// How long status messages stay on screen, in milliseconds (default: 3000).
    #[serde(default = "default_status_ttl_ms")]
    pub status_ttl_ms: u64,
}

/// Log output. The TUI owns stdout, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (default: "info"). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache_dir>/snapfeed/snapfeed.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_username() -> String {
    "あなた".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_timestamp_format() -> String {
    "%Y/%m/%d %H:%M:%S".to_string()
}

fn default_status_ttl_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            timestamp_format: default_timestamp_format(),
            status_ttl_ms: default_status_ttl_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or the default under the cache directory.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("snapfeed")
                .join("snapfeed.log")
        })
    }
}
