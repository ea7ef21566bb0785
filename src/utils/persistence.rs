//! The ~/.battle_arena/ directory and the JSON settings files kept in it.

use crate::core::constants::APP_DIR_NAME;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// ~/.battle_arena/, created on first use.
pub fn arena_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn app_path(filename: &str) -> io::Result<PathBuf> {
    Ok(arena_dir()?.join(filename))
}

/// Reads `path` as JSON.
///
/// A missing file yields `T::default()` quietly. An unreadable or unparsable
/// one also yields the default, with a warning, so a bad settings file never
/// stops the game from starting.
pub fn read_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read settings file");
            return T::default();
        }
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring invalid JSON file");
        T::default()
    })
}

/// Writes `data` to `path` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
