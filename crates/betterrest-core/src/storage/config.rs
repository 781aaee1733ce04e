//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Form defaults (wake time, sleep goal, coffee intake)
//! - An optional coefficient table overriding the bundled sleep model
//! - Clock style for displaying bedtimes
//!
//! Configuration is stored at `~/.config/betterrest/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, ValidationError};
use crate::estimator::{BedtimeEstimator, ClockStyle};
use crate::inputs::{CaffeineIntake, SleepGoal, WakeTime};

/// Values the form starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_wake_time")]
    pub wake_time: String,
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    #[serde(default)]
    pub coffee_cups: u32,
}

/// Sleep model selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to a TOML coefficient table. Unset means the bundled model.
    #[serde(default)]
    pub path: Option<String>,
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub clock: ClockStyle,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/betterrest/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_wake_time() -> String {
    "07:00".into()
}
fn default_sleep_hours() -> f64 {
    8.0
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            wake_time: default_wake_time(),
            sleep_hours: default_sleep_hours(),
            coffee_cups: 0,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            let not_a_number =
                                || invalid(format!("cannot parse '{value}' as number"));
                            value
                                .parse::<f64>()
                                .ok()
                                .and_then(serde_json::Number::from_f64)
                                .map(serde_json::Value::Number)
                                .ok_or_else(not_a_number)?
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(unknown());
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the default config cannot be written.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config found, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// or is outside its valid range. The config is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        updated.validate().map_err(|e| invalid(e.to_string()))?;
        *self = updated;
        Ok(())
    }

    /// Check that the form defaults are valid estimator inputs.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range or unparsable default.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.wake_time()?;
        self.sleep_goal()?;
        self.caffeine()?;
        Ok(())
    }

    pub fn wake_time(&self) -> Result<WakeTime, ValidationError> {
        self.defaults.wake_time.parse()
    }

    pub fn sleep_goal(&self) -> Result<SleepGoal, ValidationError> {
        SleepGoal::new(self.defaults.sleep_hours)
    }

    pub fn caffeine(&self) -> Result<CaffeineIntake, ValidationError> {
        CaffeineIntake::new(self.defaults.coffee_cups)
    }

    pub fn model_path(&self) -> Option<PathBuf> {
        self.model
            .path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Estimator for the configured model.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ModelUnavailable`] if the configured table cannot
    /// be loaded.
    pub fn estimator(&self) -> Result<BedtimeEstimator, CoreError> {
        BedtimeEstimator::load(self.model_path().as_deref())
    }
}
