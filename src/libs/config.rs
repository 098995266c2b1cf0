//! Configuration management for the tsync application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and loaded at the start of every run. Each integration is an optional
//! module so the application works out of the box with defaults: a missing
//! configuration file simply yields `Config::default()`, and a missing
//! `feed` module falls back to the default public feed URL.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsync::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let feed = config.feed.unwrap_or_default();
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default remote endpoint serving the task feed.
pub const DEFAULT_FEED_URL: &str = "https://jsonplaceholder.typicode.com/todos/";

/// Remote task feed connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeedConfig {
    /// URL returning the JSON array of task records.
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

/// Main configuration container.
///
/// Unconfigured modules are omitted from the JSON output via
/// `skip_serializing_if`, keeping the file clean and hand-editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Task feed settings; `None` means the built-in default feed is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<FeedConfig>,
}

impl Config {
    /// Reads the configuration from the filesystem.
    ///
    /// A missing file is not an error: the application falls back to the
    /// default configuration so a fresh installation can sync immediately.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Prompts for the feed URL with the current (or default) value
    /// pre-filled, and returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default_feed = config.feed.clone().unwrap_or_default();

        config.feed = Some(FeedConfig {
            url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptFeedUrl.to_string())
                .default(default_feed.url)
                .interact_text()?,
        });

        Ok(config)
    }
}
