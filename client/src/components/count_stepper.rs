//! Labeled numeric stepper with decrement/increment buttons.
//!
//! DESIGN
//! ======
//! A single `RwSignal<ChangeFeed>` holds the range and the raw input text. DOM
//! events and prop changes go through it, and whatever value it reports is
//! passed to `on_new_value`. The mount value is never reported.

use leptos::prelude::*;
use stepper::{StepAction, StepperConfig};

use crate::util::change_feed::ChangeFeed;
use crate::util::keyboard::key_action;

#[cfg(test)]
#[path = "count_stepper_test.rs"]
mod count_stepper_test;

pub const DEFAULT_LABEL_TEXT: &str = "Count:";

/// Bounded integer input with step buttons.
///
/// Changing `default_value` after mount resets the value to the new default;
/// changing only `min`/`max` keeps the value, clamped into the new range.
#[component]
pub fn CountStepper(
    #[prop(into)] input_id: String,
    #[prop(into, default = DEFAULT_LABEL_TEXT.to_owned())] label_text: String,
    #[prop(optional, into)] min: MaybeProp<i64>,
    #[prop(optional, into)] max: MaybeProp<i64>,
    #[prop(optional, into)] default_value: MaybeProp<i64>,
    #[prop(optional)] on_new_value: Option<Callback<String>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let config = Memo::new(move |_| resolve_config(min.get(), max.get(), default_value.get()));
    let feed = RwSignal::new(ChangeFeed::new(config.get_untracked()));

    let notify = move |changed: Option<String>| {
        let Some(next) = changed else {
            return;
        };
        log::debug!("count stepper value changed to {next:?}");
        if let Some(on_new_value) = on_new_value {
            on_new_value.run(next);
        }
    };

    Effect::new(move || {
        let next = config.get();
        if feed.with_untracked(|f| f.stepper().config() != &next) {
            notify(feed.try_update(|f| f.reinitialize(next)).flatten());
        }
    });

    let dispatch = move |action: StepAction| {
        notify(feed.try_update(|f| f.dispatch(action)).flatten());
    };

    let value = Memo::new(move |_| feed.with(|f| f.stepper().value().to_owned()));
    let dec_disabled = move || feed.with(|f| !f.stepper().can_decrement());
    let inc_disabled = move || feed.with(|f| !f.stepper().can_increment());

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let select_on_focus = move |_: leptos::ev::FocusEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.select();
            }
        }
    };

    let root_class = match class {
        Some(extra) => format!("count-stepper {extra}"),
        None => "count-stepper".to_owned(),
    };

    view! {
        <div class=root_class>
            <label class="count-stepper__label" for=input_id.clone()>
                {label_text}
            </label>
            <div class="count-stepper__controls">
                <button
                    type="button"
                    class="count-stepper__button count-stepper__button--decrement"
                    aria-label="decrement"
                    disabled=dec_disabled
                    on:click=move |_| dispatch(StepAction::Decrement)
                >
                    {decrement_icon()}
                </button>
                <input
                    node_ref=input_ref
                    id=input_id
                    class="count-stepper__input"
                    type="text"
                    inputmode="numeric"
                    pattern="[0-9]*"
                    autocapitalize="off"
                    autocomplete="off"
                    {..leptos::tachys::html::attribute::custom::custom_attribute("autocorrect", "off")}
                    spellcheck="false"
                    prop:value=move || value.get()
                    on:input=move |ev| dispatch(StepAction::SetValue(event_target_value(&ev)))
                    on:focus=select_on_focus
                    on:blur=move |_| dispatch(StepAction::Coerce)
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if let Some(action) = key_action(&ev.key()) {
                            ev.prevent_default();
                            dispatch(action);
                        }
                    }
                />
                <button
                    type="button"
                    class="count-stepper__button count-stepper__button--increment"
                    aria-label="increment"
                    disabled=inc_disabled
                    on:click=move |_| dispatch(StepAction::Increment)
                >
                    {increment_icon()}
                </button>
            </div>
        </div>
    }
}

/// Resolve props into a usable range, falling back to the widget defaults for
/// missing props. Invalid combinations are logged and normalized.
pub(crate) fn resolve_config(
    min: Option<i64>,
    max: Option<i64>,
    default_value: Option<i64>,
) -> StepperConfig {
    let defaults = StepperConfig::default();
    let min = min.unwrap_or(defaults.min);
    let max = max.unwrap_or(defaults.max);
    let default_value = default_value.unwrap_or(defaults.default_value);

    match StepperConfig::new(min, max, default_value) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("count stepper: {err}; normalizing range");
            StepperConfig::normalized(min, max, default_value)
        }
    }
}

fn decrement_icon() -> impl IntoView {
    view! {
        <svg
            height="100%"
            width="100%"
            xmlns="http://www.w3.org/2000/svg"
            fill="currentColor"
            viewBox="0 0 40 40"
            preserveAspectRatio="xMidYMid meet"
            aria-hidden="true"
        >
            <g>
                <path d="m22.5 17.5v-5h-5v5h-5l7.5 10 7.5-10h-5z" />
            </g>
        </svg>
    }
}

fn increment_icon() -> impl IntoView {
    view! {
        <svg
            height="100%"
            width="100%"
            xmlns="http://www.w3.org/2000/svg"
            fill="currentColor"
            viewBox="0 0 40 40"
            preserveAspectRatio="xMidYMid meet"
            aria-hidden="true"
        >
            <g>
                <path d="m20 12.5l-7.5 10h5v5h5v-5h5l-7.5-10z" />
            </g>
        </svg>
    }
}
