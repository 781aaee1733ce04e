//! Bedtime estimation.
//!
//! [`BedtimeEstimator`] wraps a [`SleepModel`] and turns its prediction into a
//! time of day: the wake time minus the predicted sleep, wrapped into a single
//! 24-hour day. The estimator holds no mutable state, so a UI that wants live
//! updates simply calls [`BedtimeEstimator::estimate`] again on every input
//! change.

use std::fmt;
use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, Result, FALLBACK_MESSAGE};
use crate::inputs::{CaffeineIntake, SleepGoal, WakeTime, SECONDS_PER_DAY};
use crate::model::SleepModel;

const MINUTES_PER_DAY: u32 = SECONDS_PER_DAY / 60;

/// Recommended bedtime, at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecommendedBedtime {
    minute_of_day: u32,
}

impl RecommendedBedtime {
    /// Wake time minus `sleep_hours`, wrapped into `[0, 24)`.
    ///
    /// The offset is rounded to the nearest second before the seconds are
    /// dropped, so `7:00 - 8h` lands on `23:00` even when the prediction
    /// carries floating-point noise.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonFinitePrediction`] if the offset in seconds
    /// overflows.
    pub fn from_wake_and_sleep(wake: WakeTime, sleep_hours: f64) -> Result<Self, ModelError> {
        let seconds = (f64::from(wake.seconds()) - sleep_hours * 3600.0).round();
        let wrapped = seconds.rem_euclid(f64::from(SECONDS_PER_DAY));
        if !wrapped.is_finite() {
            return Err(ModelError::NonFinitePrediction);
        }
        // rem_euclid keeps us in [0, 86400); the min guards the float edge.
        let minute_of_day = ((wrapped / 60.0).floor() as u32).min(MINUTES_PER_DAY - 1);
        Ok(Self { minute_of_day })
    }

    pub fn hour(self) -> u32 {
        self.minute_of_day / 60
    }

    pub fn minute(self) -> u32 {
        self.minute_of_day % 60
    }

    /// Minutes since midnight.
    pub fn minute_of_day(self) -> u32 {
        self.minute_of_day
    }

    pub fn as_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// 12-hour clock, e.g. `11:00 PM`.
    pub fn format_12h(self) -> String {
        self.as_naive_time().format("%-I:%M %p").to_string()
    }

    /// Format using the given clock style.
    pub fn format_with(self, clock: ClockStyle) -> String {
        match clock {
            ClockStyle::TwentyFourHour => self.to_string(),
            ClockStyle::TwelveHour => self.format_12h(),
        }
    }
}

/// `HH:MM`, 24-hour.
impl fmt::Display for RecommendedBedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for RecommendedBedtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How bedtimes are rendered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockStyle {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

impl std::str::FromStr for ClockStyle {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "24" => Ok(ClockStyle::TwentyFourHour),
            "12h" | "12" => Ok(ClockStyle::TwelveHour),
            other => Err(crate::error::ValidationError::InvalidValue {
                field: "clock".into(),
                message: format!("expected 24h or 12h, got '{other}'"),
            }),
        }
    }
}

/// Full record of one estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedtimeReport {
    pub wake_time: String,
    pub sleep_hours: f64,
    pub coffee_cups: u32,
    pub predicted_sleep_hours: f64,
    pub bedtime: RecommendedBedtime,
}

/// Recommends a bedtime from a fitted [`SleepModel`].
#[derive(Debug, Clone)]
pub struct BedtimeEstimator {
    model: SleepModel,
}

impl BedtimeEstimator {
    pub fn new(model: SleepModel) -> Self {
        Self { model }
    }

    /// Estimator backed by the coefficient table shipped with the library.
    ///
    /// # Errors
    ///
    /// Returns [`ModelUnavailable`](crate::CoreError::ModelUnavailable) if the embedded table
    /// is corrupt.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(SleepModel::bundled()?))
    }

    /// Estimator backed by a coefficient table on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ModelUnavailable`](crate::CoreError::ModelUnavailable) if the file is missing
    /// or corrupt.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(SleepModel::from_path(path)?))
    }

    /// Bundled table when `path` is `None`, otherwise the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelUnavailable`](crate::CoreError::ModelUnavailable) if the chosen table
    /// cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn model(&self) -> &SleepModel {
        &self.model
    }

    /// Predicted actual sleep in hours.
    ///
    /// # Errors
    ///
    /// Returns [`ModelUnavailable`](crate::CoreError::ModelUnavailable) if the prediction is
    /// not finite.
    pub fn predict(
        &self,
        wake: WakeTime,
        sleep: SleepGoal,
        caffeine: CaffeineIntake,
    ) -> Result<f64> {
        Ok(self.model.predict(wake, sleep, caffeine)?)
    }

    /// Recommended bedtime for the given inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ModelUnavailable`](crate::CoreError::ModelUnavailable) if the model cannot be
    /// evaluated.
    pub fn estimate(
        &self,
        wake: WakeTime,
        sleep: SleepGoal,
        caffeine: CaffeineIntake,
    ) -> Result<RecommendedBedtime> {
        Ok(self.report(wake, sleep, caffeine)?.bedtime)
    }

    /// Validate raw UI values, then estimate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`](crate::CoreError::InvalidInput) if any value is outside its range,
    /// or [`ModelUnavailable`](crate::CoreError::ModelUnavailable) if the model cannot be
    /// evaluated.
    pub fn estimate_raw(
        &self,
        wake_seconds: u32,
        sleep_hours: f64,
        coffee_cups: u32,
    ) -> Result<RecommendedBedtime> {
        let wake = WakeTime::from_seconds(wake_seconds)?;
        let sleep = SleepGoal::new(sleep_hours)?;
        let caffeine = CaffeineIntake::new(coffee_cups)?;
        self.estimate(wake, sleep, caffeine)
    }

    /// Inputs, prediction and bedtime in one serializable record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelUnavailable`](crate::CoreError::ModelUnavailable) if the model cannot be
    /// evaluated.
    pub fn report(
        &self,
        wake: WakeTime,
        sleep: SleepGoal,
        caffeine: CaffeineIntake,
    ) -> Result<BedtimeReport> {
        let predicted = self.predict(wake, sleep, caffeine)?;
        let bedtime = RecommendedBedtime::from_wake_and_sleep(wake, predicted)?;
        tracing::debug!(
            wake = %wake,
            sleep_hours = sleep.hours(),
            coffee_cups = caffeine.cups(),
            predicted_sleep_hours = predicted,
            bedtime = %bedtime,
            "estimated bedtime"
        );
        Ok(BedtimeReport {
            wake_time: wake.to_string(),
            sleep_hours: sleep.hours(),
            coffee_cups: caffeine.cups(),
            predicted_sleep_hours: predicted,
            bedtime,
        })
    }

    /// Sentence for display; never fails.
    ///
    /// Yields `Your ideal bedtime is HH:MM`, or
    /// [`FALLBACK_MESSAGE`] when the
    /// estimate cannot be produced.
    pub fn describe(
        &self,
        wake: WakeTime,
        sleep: SleepGoal,
        caffeine: CaffeineIntake,
        clock: ClockStyle,
    ) -> String {
        describe_result(self.estimate(wake, sleep, caffeine), clock)
    }
}

/// Render an estimate result the way the form shows it.
pub fn describe_result(result: Result<RecommendedBedtime>, clock: ClockStyle) -> String {
    match result {
        Ok(bedtime) => format!("Your ideal bedtime is {}", bedtime.format_with(clock)),
        Err(e) => {
            tracing::warn!(error = %e, "bedtime estimate failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

impl From<SleepModel> for BedtimeEstimator {
    fn from(model: SleepModel) -> Self {
        Self::new(model)
    }
}
