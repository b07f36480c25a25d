//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components bind `stepper` state to reactive signals and render the
//! widget markup.

pub mod count_stepper;
