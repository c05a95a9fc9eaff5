//! Settings and local storage
//!
//! The client persists two small JSON files: `settings.json` (API base
//! URL, page size, chat polling, theme) under the config directory and
//! `session.json` (auth token + profile snapshot) under the data
//! directory. A missing or unreadable settings file falls back to
//! defaults; a corrupt session file just means signed-out.

mod settings_file;

pub use settings_file::{
    config_dir, data_dir, ensure_directories, load_json, save_json, session_file, settings_file,
};

use anyhow::Result;
use ludex_ui::ThemeMode;
use serde::{Deserialize, Serialize};

/// User-editable application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LudexSettings {
    /// Base URL of the catalogue REST API.
    pub api_base_url: String,
    /// Rows per table page.
    pub page_size: usize,
    /// Seconds between conversation-list refreshes.
    pub chat_poll_seconds: u64,
    pub theme: ThemeMode,
}

impl Default for LudexSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000/api/".to_string(),
            page_size: 10,
            chat_poll_seconds: 30,
            theme: ThemeMode::Dark,
        }
    }
}

impl LudexSettings {
    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load() -> Self {
        match settings_file().and_then(|path| load_json::<Self>(&path)) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                tracing::info!("no settings file, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(%err, "could not read settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        ensure_directories()?;
        let path = settings_file()?;
        save_json(&path, self)?;
        tracing::info!(path = %path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_sensible() {
        let settings = LudexSettings::default();
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.chat_poll_seconds, 30);
        assert!(settings.api_base_url.ends_with('/'));
    }

    #[test]
    fn settings_round_trip_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = LudexSettings::default();
        settings.page_size = 25;
        settings.theme = ThemeMode::Light;
        save_json(&path, &settings).unwrap();

        let loaded: LudexSettings = load_json(&path).unwrap().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn partial_settings_fill_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"pageSize": 50}"#).unwrap();

        let loaded: LudexSettings = load_json(&path).unwrap().unwrap();
        assert_eq!(loaded.page_size, 50);
        assert_eq!(
            loaded.chat_poll_seconds,
            LudexSettings::default().chat_poll_seconds
        );
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(load_json::<LudexSettings>(&path).unwrap().is_none());
    }
}
