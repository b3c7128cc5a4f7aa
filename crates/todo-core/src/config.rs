use crate::{TodoError, TodoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FADE_DURATION_MS: u64 = 500;
pub const DEFAULT_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// How long a removed task fades before it leaves the list.
    #[serde(default)]
    pub fade_duration_ms: Option<u64>,
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todo\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults on any problem.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TodoError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn with_fade_duration_ms(mut self, fade_duration_ms: Option<u64>) -> Self {
        if fade_duration_ms.is_some() {
            self.fade_duration_ms = fade_duration_ms;
        }
        self
    }

    pub fn effective_fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms.unwrap_or(DEFAULT_FADE_DURATION_MS))
    }

    pub fn effective_tick_rate(&self) -> Duration {
        // A zero tick rate would spin the event loop.
        Duration::from_millis(self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS).max(1))
    }
}
