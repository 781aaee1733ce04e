//! Sleep model.
//!
//! The model is a fixed linear fit delivered as an opaque coefficient table;
//! this module loads and evaluates it but never trains it.

mod coefficients;

pub use coefficients::{Coefficients, ModelInfo, SleepModel, BUNDLED_MODEL};
