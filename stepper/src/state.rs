//! Stepper value and the reducer that drives it.
//!
//! DESIGN
//! ======
//! The value is kept as the raw text shown in the input so typing is never
//! fought by the widget. Only the step and coerce actions normalize it back
//! to the canonical text of an in-range integer.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::config::StepperConfig;
use crate::parse::{parse_float_prefix, parse_int_prefix};

/// User intents the stepper responds to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepAction {
    /// Step one above the current value.
    Increment,
    /// Step one below the current value.
    Decrement,
    /// Normalize the current text into a valid in-range value.
    Coerce,
    /// Replace the current text verbatim, e.g. while typing.
    SetValue(String),
}

/// Compute the value that follows `value` after `action`.
///
/// Returns `None` when the action leaves the value unchanged.
#[must_use]
pub fn reduce(config: &StepperConfig, value: &str, action: StepAction) -> Option<String> {
    let next = match action {
        StepAction::Increment => step(config, value, 1),
        StepAction::Decrement => step(config, value, -1),
        StepAction::Coerce => match parse_int_prefix(value) {
            Some(parsed) => config.clamped_text(parsed),
            None => config.default_text(),
        },
        StepAction::SetValue(text) => text,
    };
    (next != value).then_some(next)
}

fn step(config: &StepperConfig, value: &str, delta: i64) -> String {
    match parse_int_prefix(value) {
        Some(parsed) => config.clamped_text(parsed.saturating_add(delta)),
        None => config.default_text(),
    }
}

/// A stepper instance: its range plus the current input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stepper {
    config: StepperConfig,
    value: String,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(StepperConfig::default())
    }
}

impl Stepper {
    #[must_use]
    pub fn new(config: StepperConfig) -> Self {
        Self {
            value: config.default_text(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Apply `action`, returning whether the value changed.
    pub fn dispatch(&mut self, action: StepAction) -> bool {
        match reduce(&self.config, &self.value, action) {
            Some(next) => {
                self.value = next;
                true
            }
            None => false,
        }
    }

    /// Adopt a new range. A changed default re-seeds the value with the new
    /// default text; otherwise the current value is kept, normalized into the
    /// new bounds. Returns whether the value changed.
    pub fn reinitialize(&mut self, config: StepperConfig) -> bool {
        if config == self.config {
            return false;
        }
        let default_changed = config.default_value != self.config.default_value;
        self.config = config;
        let next = if default_changed {
            Some(config.default_text()).filter(|next| *next != self.value)
        } else {
            reduce(&self.config, &self.value, StepAction::Coerce)
        };
        match next {
            Some(next) => {
                self.value = next;
                true
            }
            None => false,
        }
    }

    /// Decrement is unavailable once the value reaches the lower bound.
    /// Non-numeric text leaves it available.
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let min = self.config.min as f64;
        parse_float_prefix(&self.value).map_or(true, |value| value > min)
    }

    /// Increment is unavailable once the value reaches the upper bound.
    /// Non-numeric text leaves it available.
    #[must_use]
    pub fn can_increment(&self) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let max = self.config.max as f64;
        parse_float_prefix(&self.value).map_or(true, |value| value < max)
    }
}
