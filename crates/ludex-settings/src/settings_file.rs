//! Settings file utilities

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("ludex"))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|p| p.join("ludex"))
}

pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("settings.json"))
}

pub fn session_file() -> Result<PathBuf> {
    data_dir().map(|p| p.join("session.json"))
}

pub fn ensure_directories() -> Result<()> {
    let dirs = [config_dir()?, data_dir()?];
    for dir in dirs {
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {:?}", dir))?;
        }
    }
    Ok(())
}

/// Read a JSON file; `Ok(None)` when it does not exist.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    let value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {:?}", path))?;
    Ok(Some(value))
}

/// Write a JSON file, pretty-printed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    std::fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}
