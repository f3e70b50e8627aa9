//! Configuration management for the todl application.
//!
//! Settings live in a JSON file in the platform data directory. Missing
//! fields fall back to defaults, so an empty or absent file is always
//! valid. `todl init` runs an interactive setup that writes the file.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;

pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_confirm_remove() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// strftime pattern used when parsing due dates from user input.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Ask for confirmation before removing a task interactively.
    #[serde(default = "default_confirm_remove")]
    pub confirm_remove: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_format: default_date_format(),
            confirm_remove: default_confirm_remove(),
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the file
    /// is absent. A file that exists but fails to parse is reported and
    /// replaced by defaults rather than aborting the command.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let file = File::open(&config_path)?;
        match serde_json::from_reader(file) {
            Ok(config) => Ok(config),
            Err(_) => {
                msg_error!(Message::ConfigParseError);
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&config_path)?;
        serde_json::to_writer_pretty(file, self)?;

        Ok(())
    }
}
