//! Range configuration for a stepper instance.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 9;
pub const DEFAULT_VALUE: i64 = 1;

/// Error returned when a [`StepperConfig`] describes an unusable range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepperError {
    /// The lower bound is greater than the upper bound.
    #[error("stepper min {min} is greater than max {max}")]
    InvertedBounds { min: i64, max: i64 },
    /// The default value falls outside `[min, max]`.
    #[error("stepper default {default_value} is outside [{min}, {max}]")]
    DefaultOutOfRange { default_value: i64, min: i64, max: i64 },
}

/// Inclusive integer range and starting value for a stepper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    pub min: i64,
    pub max: i64,
    pub default_value: i64,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            default_value: DEFAULT_VALUE,
        }
    }
}

impl StepperConfig {
    /// Build a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::InvertedBounds`] when `min > max` and
    /// [`StepperError::DefaultOutOfRange`] when the default is not inside
    /// the range.
    pub fn new(min: i64, max: i64, default_value: i64) -> Result<Self, StepperError> {
        let config = Self { min, max, default_value };
        config.validate()?;
        Ok(config)
    }

    /// Check a config that was built without [`StepperConfig::new`], e.g. by
    /// deserialization.
    ///
    /// # Errors
    ///
    /// Same conditions as [`StepperConfig::new`].
    pub fn validate(&self) -> Result<(), StepperError> {
        if self.min > self.max {
            return Err(StepperError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }
        if !self.contains(self.default_value) {
            return Err(StepperError::DefaultOutOfRange {
                default_value: self.default_value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Build a usable config from arbitrary input: inverted bounds are
    /// swapped and the default is pulled into range.
    #[must_use]
    pub fn normalized(min: i64, max: i64, default_value: i64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self {
            min,
            max,
            default_value: default_value.clamp(min, max),
        }
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Nearest value inside `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        value.max(self.min).min(self.max)
    }

    #[must_use]
    pub fn clamped_text(&self, value: i64) -> String {
        self.clamp(value).to_string()
    }

    #[must_use]
    pub fn default_text(&self) -> String {
        self.default_value.to_string()
    }
}
