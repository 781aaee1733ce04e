//! Coefficient table loading and evaluation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::inputs::{CaffeineIntake, SleepGoal, WakeTime};

/// Coefficient table shipped with the library.
pub const BUNDLED_MODEL: &str = include_str!("sleep_calculator.toml");

/// Descriptive metadata carried alongside the coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_target")]
    pub target: String,
}

fn default_name() -> String {
    "SleepCalculator".into()
}
fn default_target() -> String {
    "actual_sleep_hours".into()
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            target: default_target(),
        }
    }
}

/// Intercept and per-feature weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub intercept: f64,
    /// Per second since midnight
    pub wake: f64,
    /// Per hour of desired sleep
    pub estimated_sleep: f64,
    /// Per cup of coffee
    pub coffee: f64,
}

/// A fitted linear sleep model.
///
/// `actual_sleep = intercept + wake * seconds + estimated_sleep * hours + coffee * cups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepModel {
    #[serde(default)]
    pub model: ModelInfo,
    pub coefficients: Coefficients,
}

impl SleepModel {
    /// Build a model directly from coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonFiniteCoefficient`] if any coefficient is NaN
    /// or infinite.
    pub fn new(coefficients: Coefficients) -> Result<Self, ModelError> {
        let model = Self {
            model: ModelInfo::default(),
            coefficients,
        };
        model.check()?;
        Ok(model)
    }

    /// The coefficient table compiled into the library.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded table is corrupt.
    pub fn bundled() -> Result<Self, ModelError> {
        Self::from_toml_str(BUNDLED_MODEL)
    }

    /// Parse a TOML coefficient table.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse, a coefficient is missing,
    /// or a coefficient is not finite.
    pub fn from_toml_str(content: &str) -> Result<Self, ModelError> {
        let model: SleepModel = toml::from_str(content)?;
        model.check()?;
        Ok(model)
    }

    /// Read and parse a TOML coefficient table from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ReadFailed`] if the file cannot be read, or any
    /// error from [`SleepModel::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = %model.model.name, "loaded sleep model");
        Ok(model)
    }

    fn check(&self) -> Result<(), ModelError> {
        let c = &self.coefficients;
        for (name, value) in [
            ("intercept", c.intercept),
            ("wake", c.wake),
            ("estimated_sleep", c.estimated_sleep),
            ("coffee", c.coffee),
        ] {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteCoefficient { name });
            }
        }
        Ok(())
    }

    /// Predicted actual sleep in hours.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonFinitePrediction`] if the sum overflows.
    pub fn predict(
        &self,
        wake: WakeTime,
        sleep: SleepGoal,
        caffeine: CaffeineIntake,
    ) -> Result<f64, ModelError> {
        let c = &self.coefficients;
        let predicted = c.intercept
            + c.wake * f64::from(wake.seconds())
            + c.estimated_sleep * sleep.hours()
            + c.coffee * f64::from(caffeine.cups());

        if predicted.is_finite() {
            Ok(predicted)
        } else {
            Err(ModelError::NonFinitePrediction)
        }
    }
}
