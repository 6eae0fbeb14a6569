/// Configuration and constants for the toolkit demo

use crate::terminal::HighlightColor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Title printed above the demo menu
pub const APP_TITLE: &str = "Console Kit Demonstration";

/// Retry message used when no more specific one applies
pub const DEFAULT_RETRY_MESSAGE: &str = "Please retry";

const DEFAULT_TABLE_WIDTH: usize = 50;
const DEFAULT_TABLE_INDENT: usize = 2;
const DEFAULT_LOG_FILTER: &str = "warn";

/// User configuration loaded from ~/.config/consolekit/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color of the highlighted menu entry
    #[serde(default)]
    pub highlight_color: HighlightColor,

    /// Total width of rendered tables, in characters
    #[serde(default = "default_table_width")]
    pub table_width: usize,

    /// Left margin of rendered tables, in units of two spaces
    #[serde(default = "default_table_indent")]
    pub table_indent: usize,

    /// tracing filter directive; RUST_LOG takes precedence
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight_color: HighlightColor::default(),
            table_width: default_table_width(),
            table_indent: default_table_indent(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config/consolekit/config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from ~/.config/consolekit/config.toml
    /// Falls back to defaults if the file doesn't exist or can't be parsed
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if let Ok(content) = fs::read_to_string(&config_path) {
                match Self::from_toml_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("⚠ Failed to parse config file {}: {}", config_path.display(), e);
                        eprintln!("  Using default configuration");
                    }
                }
            }
        }

        Self::default()
    }
}

fn default_table_width() -> usize {
    DEFAULT_TABLE_WIDTH
}

fn default_table_indent() -> usize {
    DEFAULT_TABLE_INDENT
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
