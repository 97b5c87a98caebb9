//! Stored high score and player preferences
//!
//! Settings live in a small JSON file. The game core never touches it; the
//! frontend loads it at startup and writes back the high score it gets from
//! finished episodes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::game::{BoardSize, Speed};
use crate::render::ThemeName;

/// File name inside the settings directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Everything remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub highscore: u32,
    pub theme: ThemeName,
    pub speed: Speed,
    pub size: BoardSize,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file does
    /// not exist yet
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse settings in {:?}", path))
    }

    /// Write settings to `path`, creating parent directories if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;

        Ok(())
    }

    /// Keep the better of the stored and the reported high score
    pub fn record_highscore(&mut self, highscore: u32) -> bool {
        if highscore > self.highscore {
            self.highscore = highscore;
            true
        } else {
            false
        }
    }
}

/// Per-user directory for settings and logs
pub fn default_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
}

pub fn default_path() -> PathBuf {
    default_dir().join(SETTINGS_FILE)
}
