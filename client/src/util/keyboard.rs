//! Keyboard shortcuts for the stepper input.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use stepper::StepAction;

/// Map a DOM `KeyboardEvent.key` name to the stepper action it triggers.
pub fn key_action(key: &str) -> Option<StepAction> {
    match key {
        "ArrowUp" => Some(StepAction::Increment),
        "ArrowDown" => Some(StepAction::Decrement),
        "Enter" => Some(StepAction::Coerce),
        _ => None,
    }
}
