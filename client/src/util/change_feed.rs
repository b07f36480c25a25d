//! Stepper state paired with its change-notification gate.
//!
//! The component keeps one `ChangeFeed` in a signal. Every mutation returns
//! the value to report, so the callback wiring stays a one-liner and the
//! mount/reinitialize reporting rules are testable without a browser.

#[cfg(test)]
#[path = "change_feed_test.rs"]
mod change_feed_test;

use stepper::{StepAction, Stepper, StepperConfig};

use crate::util::value_watch::ValueWatch;

#[derive(Clone, Debug)]
pub struct ChangeFeed {
    stepper: Stepper,
    watch: ValueWatch<String>,
}

impl ChangeFeed {
    /// Start at the config's default. The mount value is recorded as seen, so
    /// it is never reported.
    pub fn new(config: StepperConfig) -> Self {
        let stepper = Stepper::new(config);
        let mut watch = ValueWatch::default();
        watch.observe(&stepper.value().to_owned());
        Self { stepper, watch }
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    /// Apply a user action, returning the new value when it changed.
    pub fn dispatch(&mut self, action: StepAction) -> Option<String> {
        self.stepper.dispatch(action);
        self.report()
    }

    /// Adopt a new config, returning the new value when it changed.
    pub fn reinitialize(&mut self, config: StepperConfig) -> Option<String> {
        self.stepper.reinitialize(config);
        self.report()
    }

    fn report(&mut self) -> Option<String> {
        self.watch.observe(&self.stepper.value().to_owned())
    }
}
