use crate::core::narrative::DEFAULT_MIN_PAID_EVENTS;
use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    /// Default top-K for `distribution`; 0 = no cap.
    #[serde(default)]
    pub distribution_limit: usize,
    #[serde(default = "default_min_paid")]
    pub min_paid_for_streaks: usize,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_min_paid() -> usize {
    DEFAULT_MIN_PAID_EVENTS
}
fn default_wrap_width() -> usize {
    72
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            distribution_limit: 0,
            min_paid_for_streaks: default_min_paid(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rserialstats`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rserialstats")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rserialstats.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the configuration from its standard location
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.wrap_width < 20 {
            return Err(AppError::Config(format!(
                "wrap_width must be at least 20 (got {})",
                self.wrap_width
            )));
        }
        Ok(())
    }

    /// `None` when no cap is configured.
    pub fn distribution_limit(&self) -> Option<usize> {
        (self.distribution_limit > 0).then_some(self.distribution_limit)
    }
}
