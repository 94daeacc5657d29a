//! TOML-based pomodoro configuration.
//!
//! Durations are stored in seconds. Settings are updated as a group via
//! [`PomodoroConfig::validate`] + save; a session that is already running
//! keeps the duration it captured at start, so updates take effect on the
//! next session start.
//!
//! Configuration is stored at `~/.config/focustask/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::session::SessionMode;

/// Duration and rotation settings for the session engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroConfig {
    /// Length of one work session in seconds.
    #[serde(default = "default_work_duration")]
    pub work_duration_secs: u32,
    /// Length of a short break in seconds.
    #[serde(default = "default_short_break")]
    pub short_break_secs: u32,
    /// Length of a long break in seconds.
    #[serde(default = "default_long_break")]
    pub long_break_secs: u32,
    /// Number of completed work sessions between long breaks.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

fn default_work_duration() -> u32 {
    25 * 60
}
fn default_short_break() -> u32 {
    5 * 60
}
fn default_long_break() -> u32 {
    15 * 60
}
fn default_long_break_interval() -> u32 {
    4
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_duration_secs: default_work_duration(),
            short_break_secs: default_short_break(),
            long_break_secs: default_long_break(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl PomodoroConfig {
    /// Configured duration for a session mode, in seconds.
    pub fn duration_for(&self, mode: SessionMode) -> u32 {
        match mode {
            SessionMode::Work => self.work_duration_secs,
            SessionMode::ShortBreak => self.short_break_secs,
            SessionMode::LongBreak => self.long_break_secs,
        }
    }

    /// All durations and the interval must be greater than zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields: [(&'static str, u32); 4] = [
            ("work_duration_secs", self.work_duration_secs),
            ("short_break_secs", self.short_break_secs),
            ("long_break_secs", self.long_break_secs),
            ("long_break_interval", self.long_break_interval),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_path(&path)
        } else {
            let cfg = Self::default();
            cfg.save_path(&path)?;
            Ok(cfg)
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_path(&Self::path()?)
    }

    /// Load and validate a config file at an explicit path.
    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: PomodoroConfig =
            toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to an explicit path.
    pub fn save_path(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

/// Returns `~/.config/focustask[-dev]/` based on FOCUSTASK_ENV.
///
/// Set FOCUSTASK_ENV=dev to use a separate development data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSTASK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focustask-dev")
    } else {
        base_dir.join("focustask")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
