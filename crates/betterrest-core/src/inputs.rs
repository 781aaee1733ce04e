//! Validated estimator inputs.
//!
//! Each newtype can only be constructed from a value inside its range, so the
//! estimator never sees an out-of-range argument.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Seconds in a day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Time of day at which the user wants to wake up, as seconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WakeTime(u32);

impl WakeTime {
    /// 07:00, the form's initial value.
    pub const DEFAULT: WakeTime = WakeTime(7 * 3600);

    /// Create from seconds since midnight (`0..86400`).
    pub fn from_seconds(seconds: u32) -> Result<Self, ValidationError> {
        if seconds >= SECONDS_PER_DAY {
            return Err(ValidationError::OutOfRange {
                field: "wake_time",
                min: 0.0,
                max: f64::from(SECONDS_PER_DAY - 1),
                value: f64::from(seconds),
            });
        }
        Ok(Self(seconds))
    }

    /// Create from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::InvalidValue {
                field: "wake_time".into(),
                message: format!("{hour:02}:{minute:02} is not a time of day"),
            });
        }
        Self::from_seconds(hour * 3600 + minute * 60)
    }

    /// Seconds since midnight.
    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 3600
    }

    pub fn minute(self) -> u32 {
        (self.0 % 3600) / 60
    }

    pub fn as_naive_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NaiveTime> for WakeTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight())
    }
}

impl TryFrom<u32> for WakeTime {
    type Error = ValidationError;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        Self::from_seconds(seconds)
    }
}

impl From<WakeTime> for u32 {
    fn from(wake: WakeTime) -> Self {
        wake.0
    }
}

/// Accepts `HH:MM` or `HH:MM:SS`.
impl FromStr for WakeTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Self::from)
            .map_err(|e| ValidationError::InvalidValue {
                field: "wake_time".into(),
                message: format!("'{trimmed}' is not HH:MM ({e})"),
            })
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Desired amount of sleep in hours, within `[4, 12]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepGoal(f64);

impl SleepGoal {
    pub const MIN_HOURS: f64 = 4.0;
    pub const MAX_HOURS: f64 = 12.0;
    /// Increment used by the sleep stepper.
    pub const STEP_HOURS: f64 = 0.25;
    pub const DEFAULT: SleepGoal = SleepGoal(8.0);

    pub fn new(hours: f64) -> Result<Self, ValidationError> {
        if !hours.is_finite() {
            return Err(ValidationError::NotFinite { field: "sleep_goal" });
        }
        if !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(ValidationError::OutOfRange {
                field: "sleep_goal",
                min: Self::MIN_HOURS,
                max: Self::MAX_HOURS,
                value: hours,
            });
        }
        Ok(Self(hours))
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    /// One stepper increment up, saturating at the maximum.
    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP_HOURS).min(Self::MAX_HOURS))
    }

    /// One stepper increment down, saturating at the minimum.
    pub fn step_down(self) -> Self {
        Self((self.0 - Self::STEP_HOURS).max(Self::MIN_HOURS))
    }
}

impl Default for SleepGoal {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for SleepGoal {
    type Error = ValidationError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<SleepGoal> for f64 {
    fn from(goal: SleepGoal) -> Self {
        goal.0
    }
}

/// "8 hours", "8.25 hours".
impl fmt::Display for SleepGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours", self.0)
    }
}

/// Daily coffee intake in cups, within `[0, 20]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CaffeineIntake(u32);

impl CaffeineIntake {
    pub const MAX_CUPS: u32 = 20;

    pub fn new(cups: u32) -> Result<Self, ValidationError> {
        if cups > Self::MAX_CUPS {
            return Err(ValidationError::OutOfRange {
                field: "caffeine",
                min: 0.0,
                max: f64::from(Self::MAX_CUPS),
                value: f64::from(cups),
            });
        }
        Ok(Self(cups))
    }

    pub fn cups(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CaffeineIntake {
    type Error = ValidationError;

    fn try_from(cups: u32) -> Result<Self, Self::Error> {
        Self::new(cups)
    }
}

impl From<CaffeineIntake> for u32 {
    fn from(intake: CaffeineIntake) -> Self {
        intake.0
    }
}

/// "1 cup", "3 cups".
impl fmt::Display for CaffeineIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 cup")
        } else {
            write!(f, "{} cups", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wake_time_parses_hh_mm() {
        let wake: WakeTime = "07:30".parse().unwrap();
        assert_eq!(wake.seconds(), 7 * 3600 + 30 * 60);
        assert_eq!(wake.to_string(), "07:30");
    }

    #[test]
    fn wake_time_parses_seconds_component() {
        let wake: WakeTime = "06:15:42".parse().unwrap();
        assert_eq!(wake.seconds(), 6 * 3600 + 15 * 60 + 42);
    }

    #[test]
    fn wake_time_rejects_garbage() {
        assert!("7am".parse::<WakeTime>().is_err());
        assert!("24:00".parse::<WakeTime>().is_err());
        assert!(WakeTime::from_hm(12, 60).is_err());
    }

    #[test]
    fn wake_time_upper_bound_is_exclusive() {
        assert!(WakeTime::from_seconds(SECONDS_PER_DAY - 1).is_ok());
        assert!(matches!(
            WakeTime::from_seconds(SECONDS_PER_DAY),
            Err(ValidationError::OutOfRange { field: "wake_time", .. })
        ));
    }

    #[test]
    fn sleep_goal_bounds_are_inclusive() {
        assert!(SleepGoal::new(4.0).is_ok());
        assert!(SleepGoal::new(12.0).is_ok());
        assert!(SleepGoal::new(3.99).is_err());
        assert!(SleepGoal::new(12.01).is_err());
    }

    #[test]
    fn sleep_goal_rejects_nan() {
        assert_eq!(
            SleepGoal::new(f64::NAN),
            Err(ValidationError::NotFinite { field: "sleep_goal" })
        );
    }

    #[test]
    fn sleep_goal_stepper_saturates() {
        let goal = SleepGoal::new(11.9).unwrap();
        assert_eq!(goal.step_up().hours(), 12.0);
        assert_eq!(SleepGoal::new(4.0).unwrap().step_down().hours(), 4.0);
        assert_eq!(SleepGoal::DEFAULT.step_up().hours(), 8.25);
    }

    #[test]
    fn sleep_goal_label() {
        assert_eq!(SleepGoal::DEFAULT.to_string(), "8 hours");
        assert_eq!(SleepGoal::new(8.25).unwrap().to_string(), "8.25 hours");
    }

    #[test]
    fn caffeine_label_inflects() {
        assert_eq!(CaffeineIntake::new(0).unwrap().to_string(), "0 cups");
        assert_eq!(CaffeineIntake::new(1).unwrap().to_string(), "1 cup");
        assert_eq!(CaffeineIntake::new(20).unwrap().to_string(), "20 cups");
        assert!(CaffeineIntake::new(21).is_err());
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<CaffeineIntake>("21").is_err());
        assert!(serde_json::from_str::<SleepGoal>("2.0").is_err());
        let wake: WakeTime = serde_json::from_str("25200").unwrap();
        assert_eq!(wake, WakeTime::DEFAULT);
    }
}
