//! Runtime configuration, read from `~/.battle_arena/config.json`.

use super::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_FILTER, SAVE_FILE_NAME};
use crate::utils::persistence::{app_path, read_json_or_default, write_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Save file name inside the app directory, or an absolute path
    pub save_file: String,

    /// Clear the terminal whenever the scene changes
    pub clear_screen: bool,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            save_file: SAVE_FILE_NAME.to_string(),
            clear_screen: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ArenaConfig {
    /// Loads `~/.battle_arena/config.json`, falling back to defaults if it is
    /// missing or invalid.
    pub fn load() -> Self {
        match app_path(CONFIG_FILE_NAME) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!(error = %e, "no app directory, using default config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        read_json_or_default(path)
    }

    /// Writes this config to `~/.battle_arena/config.json`.
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&app_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        write_json(path, self)
    }
}
