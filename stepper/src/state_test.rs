use super::*;

fn stepper_with_value(value: &str) -> Stepper {
    let mut stepper = Stepper::default();
    stepper.dispatch(StepAction::SetValue(value.to_owned()));
    stepper
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_stepper_starts_at_default_text() {
    let config = StepperConfig::new(0, 50, 25).expect("config");
    let stepper = Stepper::new(config);
    assert_eq!(stepper.value(), "25");
    assert_eq!(stepper.config(), &config);
}

// =============================================================
// Increment / decrement
// =============================================================

#[test]
fn increment_and_decrement_step_by_one() {
    let mut stepper = Stepper::default();
    assert!(stepper.dispatch(StepAction::Increment));
    assert!(stepper.dispatch(StepAction::Increment));
    assert_eq!(stepper.value(), "3");
    assert!(stepper.dispatch(StepAction::Decrement));
    assert_eq!(stepper.value(), "2");
}

#[test]
fn steps_stop_at_bounds() {
    let mut stepper = Stepper::default();
    assert!(!stepper.dispatch(StepAction::Decrement));
    assert_eq!(stepper.value(), "1");

    let mut stepper = stepper_with_value("9");
    assert!(!stepper.dispatch(StepAction::Increment));
    assert_eq!(stepper.value(), "9");
}

#[test]
fn step_from_out_of_range_text_lands_on_bound() {
    let mut stepper = stepper_with_value("42");
    assert!(stepper.dispatch(StepAction::Decrement));
    assert_eq!(stepper.value(), "9");

    let mut stepper = stepper_with_value("-5");
    assert!(stepper.dispatch(StepAction::Increment));
    assert_eq!(stepper.value(), "1");
}

#[test]
fn step_canonicalizes_text_with_trailing_garbage() {
    let mut stepper = stepper_with_value("4abc");
    assert!(stepper.dispatch(StepAction::Increment));
    assert_eq!(stepper.value(), "5");

    let mut stepper = stepper_with_value("09");
    assert!(stepper.dispatch(StepAction::Increment));
    assert_eq!(stepper.value(), "9");
}

#[test]
fn step_from_non_numeric_text_resets_to_default() {
    let config = StepperConfig::new(1, 9, 4).expect("config");
    let mut stepper = Stepper::new(config);
    stepper.dispatch(StepAction::SetValue("abc".to_owned()));
    assert!(stepper.dispatch(StepAction::Increment));
    assert_eq!(stepper.value(), "4");
}

#[test]
fn step_saturates_at_extreme_bounds() {
    let config = StepperConfig::new(i64::MIN, i64::MAX, i64::MAX).expect("config");
    let mut stepper = Stepper::new(config);
    assert!(!stepper.dispatch(StepAction::Increment));
    assert_eq!(stepper.value(), i64::MAX.to_string());
}

// =============================================================
// Coerce
// =============================================================

#[test]
fn coerce_resets_invalid_text_to_default() {
    let mut stepper = stepper_with_value("");
    assert!(stepper.dispatch(StepAction::Coerce));
    assert_eq!(stepper.value(), "1");

    let mut stepper = stepper_with_value("lots");
    assert!(stepper.dispatch(StepAction::Coerce));
    assert_eq!(stepper.value(), "1");
}

#[test]
fn coerce_clamps_out_of_range_numbers() {
    let mut stepper = stepper_with_value("42");
    assert!(stepper.dispatch(StepAction::Coerce));
    assert_eq!(stepper.value(), "9");

    let mut stepper = stepper_with_value("-3");
    assert!(stepper.dispatch(StepAction::Coerce));
    assert_eq!(stepper.value(), "1");
}

#[test]
fn coerce_canonicalizes_numeric_text() {
    let mut stepper = stepper_with_value("007");
    assert!(stepper.dispatch(StepAction::Coerce));
    assert_eq!(stepper.value(), "7");

    let mut stepper = stepper_with_value("3.9");
    assert!(stepper.dispatch(StepAction::Coerce));
    assert_eq!(stepper.value(), "3");
}

#[test]
fn coerce_leaves_valid_value_unchanged() {
    let mut stepper = stepper_with_value("6");
    assert!(!stepper.dispatch(StepAction::Coerce));
    assert_eq!(stepper.value(), "6");
}

// =============================================================
// SetValue
// =============================================================

#[test]
fn set_value_stores_raw_text() {
    let mut stepper = Stepper::default();
    assert!(stepper.dispatch(StepAction::SetValue("12x".to_owned())));
    assert_eq!(stepper.value(), "12x");
    assert!(!stepper.dispatch(StepAction::SetValue("12x".to_owned())));
}

#[test]
fn reduce_reports_no_change_with_none() {
    let config = StepperConfig::default();
    assert_eq!(reduce(&config, "1", StepAction::Decrement), None);
    assert_eq!(reduce(&config, "1", StepAction::Increment), Some("2".to_owned()));
}

// =============================================================
// Reinitialize
// =============================================================

#[test]
fn reinitialize_resets_to_new_default() {
    let mut stepper = stepper_with_value("7");
    let config = StepperConfig::new(0, 20, 10).expect("config");
    assert!(stepper.reinitialize(config));
    assert_eq!(stepper.value(), "10");
    assert_eq!(stepper.config(), &config);
}

#[test]
fn reinitialize_with_same_config_keeps_value() {
    let mut stepper = stepper_with_value("7");
    assert!(!stepper.reinitialize(StepperConfig::default()));
    assert_eq!(stepper.value(), "7");
}

#[test]
fn reinitialize_bounds_only_keeps_current_value() {
    let mut stepper = stepper_with_value("5");
    let config = StepperConfig::new(1, 20, 1).expect("config");
    assert!(!stepper.reinitialize(config));
    assert_eq!(stepper.value(), "5");
    assert_eq!(stepper.config().max, 20);
    assert!(stepper.can_increment());
}

#[test]
fn reinitialize_bounds_only_clamps_value_into_new_range() {
    let mut stepper = stepper_with_value("8");
    let config = StepperConfig::new(1, 5, 1).expect("config");
    assert!(stepper.reinitialize(config));
    assert_eq!(stepper.value(), "5");
    assert!(!stepper.can_increment());
}

#[test]
fn reinitialize_bounds_only_replaces_non_numeric_text_with_default() {
    let mut stepper = stepper_with_value("abc");
    let config = StepperConfig::new(1, 20, 1).expect("config");
    assert!(stepper.reinitialize(config));
    assert_eq!(stepper.value(), "1");
}

#[test]
fn reinitialize_reports_no_change_when_default_text_matches() {
    let mut stepper = Stepper::default();
    let config = StepperConfig::new(0, 20, 1).expect("config");
    assert!(!stepper.reinitialize(config));
    assert_eq!(stepper.config().min, 0);
}

// =============================================================
// Boundary disabling
// =============================================================

#[test]
fn decrement_unavailable_at_lower_bound() {
    let stepper = Stepper::default();
    assert!(!stepper.can_decrement());
    assert!(stepper.can_increment());
}

#[test]
fn increment_unavailable_at_upper_bound() {
    let stepper = stepper_with_value("9");
    assert!(stepper.can_decrement());
    assert!(!stepper.can_increment());
}

#[test]
fn out_of_range_text_disables_toward_the_exceeded_bound() {
    let stepper = stepper_with_value("0.5");
    assert!(!stepper.can_decrement());
    let stepper = stepper_with_value("12");
    assert!(!stepper.can_increment());
}

#[test]
fn non_numeric_text_keeps_both_buttons_enabled() {
    let stepper = stepper_with_value("abc");
    assert!(stepper.can_decrement());
    assert!(stepper.can_increment());
}

#[test]
fn single_value_range_disables_both_buttons() {
    let stepper = Stepper::new(StepperConfig::new(3, 3, 3).expect("config"));
    assert!(!stepper.can_decrement());
    assert!(!stepper.can_increment());
}
