//! Journal configuration persistence
//!
//! Stores user preferences in `~/.config/typein/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_HISTORY_LIMIT;

/// When edits are written to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutosavePolicy {
    /// Every edit that leaves the entry dirty triggers a save
    #[default]
    Immediate,
    /// Only explicit saves (and the exit flush) write
    Manual,
}

/// Journal configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Maximum number of undo snapshots per entry
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub autosave: AutosavePolicy,

    /// Re-seed undo history from the stored draft when it matches the entry
    #[serde(default)]
    pub restore_history: bool,

    /// Override for the directory holding entries and the draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            autosave: AutosavePolicy::default(),
            restore_history: false,
            data_dir: None,
        }
    }
}

impl JournalConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.normalized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Directory for entries and draft: the override, else the default
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(crate::config_paths::data_dir)
    }

    fn normalized(mut self) -> Self {
        if self.history_limit == 0 {
            tracing::warn!("history_limit must be at least 1, using 1");
            self.history_limit = 1;
        }
        self
    }
}
