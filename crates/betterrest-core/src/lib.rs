//! # BetterRest Core Library
//!
//! This library recommends a bedtime from a desired wake-up time, a target
//! amount of sleep and a daily coffee count. A fixed linear sleep model
//! predicts how much sleep is actually needed; the bedtime is the wake time
//! minus that prediction, wrapped into a 24-hour day.
//!
//! The library has no UI. A front end (the `betterrest` CLI, or any form that
//! re-runs the estimate on each input change) reads the three inputs, calls
//! [`BedtimeEstimator::estimate`] and displays the result or
//! [`FALLBACK_MESSAGE`].
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: Turns validated inputs into a [`RecommendedBedtime`]
//! - [`SleepModel`]: Opaque coefficient table, bundled or loaded from TOML
//! - [`WakeTime`], [`SleepGoal`], [`CaffeineIntake`]: Range-checked inputs
//! - [`Config`]: Form defaults and model selection

pub mod error;
pub mod estimator;
pub mod inputs;
pub mod model;
pub mod storage;

pub use error::{ConfigError, CoreError, ModelError, ValidationError, FALLBACK_MESSAGE};
pub use estimator::{
    describe_result, BedtimeEstimator, BedtimeReport, ClockStyle, RecommendedBedtime,
};
pub use inputs::{CaffeineIntake, SleepGoal, WakeTime};
pub use model::{Coefficients, SleepModel};
pub use storage::Config;
