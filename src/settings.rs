//! User preferences for the branch popup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use tracing::warn;

/// Preference snapshot a popup session is constructed with.
///
/// The engine only reads these; hosts load, edit, and persist them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PopupPrefs {
    /// Always show the grouped-by-repository view, even when a pin exists
    #[serde(default)]
    pub grouped_by_repo: bool,
    /// Synchronized branch control across repositories (feeds the
    /// divergence banner)
    #[serde(default = "default_true")]
    pub sync_control: bool,
    /// Bucket reference names by their first slash segment
    #[serde(default)]
    pub prefix_grouping: bool,
    /// Repository id whose reference tree replaces the grouped view
    #[serde(default)]
    pub pinned_repo: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for PopupPrefs {
    fn default() -> Self {
        Self {
            grouped_by_repo: false,
            sync_control: true,
            prefix_grouping: false,
            pinned_repo: None,
        }
    }
}

impl PopupPrefs {
    fn config_dir() -> Option<PathBuf> {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join(".config").join("branch-popup"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("settings.json"))
    }

    /// Load saved preferences, falling back to defaults on any miss.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(data) = fs::read_to_string(&path) else {
            return Self::default();
        };
        serde_json::from_str(&data).unwrap_or_default()
    }

    /// Best-effort save; failures are logged, never surfaced.
    pub fn save(&self) {
        let Some(dir) = Self::config_dir() else {
            return;
        };
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("failed to create config dir: {e}");
            return;
        }
        let Some(path) = Self::config_path() else {
            return;
        };
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    warn!("failed to save preferences: {e}");
                }
            }
            Err(e) => warn!("failed to serialize preferences: {e}"),
        }
    }
}
