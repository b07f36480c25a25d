//! Bounded-integer state machine behind the count stepper widget.
//!
//! This crate owns the value policy shared by every rendering of the stepper:
//! clamping into `[min, max]`, coercing free-form input text, and deciding
//! when the increment/decrement controls are available. It has no UI
//! dependencies so the policy can be tested on the host.

pub mod config;
pub mod parse;
pub mod state;

pub use config::{StepperConfig, StepperError};
pub use parse::{parse_float_prefix, parse_int_prefix};
pub use state::{StepAction, Stepper, reduce};
