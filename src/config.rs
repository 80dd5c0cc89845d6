/// Application settings
///
/// Settings are read from a JSON file:
/// - `$BRIDAL_STYLE_CONFIG` if set
/// - otherwise `<config dir>/bridal-style/config.json`
///   (e.g. ~/.config/bridal-style/config.json on Linux)
///
/// Every field is optional; a missing file means defaults.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::state::carousel::DEFAULT_AUTOPLAY_INTERVAL;
use crate::state::data::ADVISORY_UPLOAD_LIMIT_MB;
use crate::state::sequencer::{SequencerTiming, DEFAULT_STEP_INTERVAL, DEFAULT_TOTAL_DURATION};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "BRIDAL_STYLE_CONFIG";

/// Largest upload size the UI will mention (100 GB)
pub const MAX_UPLOAD_MB: u64 = 100 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Delay between two processing steps, in milliseconds
    pub step_interval_ms: u64,
    /// Time from entering processing to showing results, in milliseconds
    pub processing_duration_ms: u64,
    /// Landing carousel autoplay delay, in milliseconds
    pub carousel_interval_ms: u64,
    /// Upload size mentioned in the UI, in megabytes
    pub max_upload_mb: u64,
    /// tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: DEFAULT_STEP_INTERVAL.as_millis() as u64,
            processing_duration_ms: DEFAULT_TOTAL_DURATION.as_millis() as u64,
            carousel_interval_ms: DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64,
            max_upload_mb: ADVISORY_UPLOAD_LIMIT_MB,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Where the config file is looked up
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|mut path| {
            path.push("bridal-style");
            path.push("config.json");
            path
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("step_interval_ms", self.step_interval_ms),
            ("processing_duration_ms", self.processing_duration_ms),
            ("carousel_interval_ms", self.carousel_interval_ms),
            ("max_upload_mb", self.max_upload_mb),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Zero { field: *field });
        }
        if self.max_upload_mb > MAX_UPLOAD_MB {
            return Err(ConfigError::TooLarge {
                field: "max_upload_mb",
                value: self.max_upload_mb,
                max: MAX_UPLOAD_MB,
            });
        }
        Ok(())
    }

    pub fn sequencer_timing(&self) -> SequencerTiming {
        SequencerTiming {
            step_interval: Duration::from_millis(self.step_interval_ms),
            total_duration: Duration::from_millis(self.processing_duration_ms),
        }
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}
