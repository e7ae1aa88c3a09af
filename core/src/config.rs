//! Game configuration
//!
//! Timing knobs and the audio toggle, persisted as TOML through confy.
//! Everything has a default matching the classic cadence, so a missing
//! or partial config file still yields a playable game.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Persisted game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Base playback interval `D` in milliseconds: each pad is lit for
    /// this long, with the same gap before the next one.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Pause between completing a level and the next playback.
    #[serde(default = "default_level_pause_ms")]
    pub level_pause_ms: u64,

    /// How long an accepted press lights its pad.
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u64,

    #[serde(default = "default_audio_enabled")]
    pub audio_enabled: bool,
}

fn default_interval_ms() -> u64 {
    200
}

fn default_level_pause_ms() -> u64 {
    200
}

fn default_flash_ms() -> u64 {
    100
}

fn default_audio_enabled() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            level_pause_ms: default_level_pause_ms(),
            flash_ms: default_flash_ms(),
            audio_enabled: default_audio_enabled(),
        }
    }
}

impl GameConfig {
    /// Load from the platform config dir, falling back to defaults.
    pub fn load() -> Self {
        confy::load("simon", "config").unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store("simon", "config", self.clone()).map_err(ConfigError::Save)
    }

    /// Load from an explicit file instead of the platform config dir.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        confy::load_path(path).map_err(ConfigError::Load)
    }

    /// Store to an explicit file instead of the platform config dir.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self.clone()).map_err(ConfigError::Save)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn level_pause(&self) -> Duration {
        Duration::from_millis(self.level_pause_ms)
    }

    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }
}
