//! Root application component and SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::count_stepper::CountStepper;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Demo page hosting a single stepper and echoing the last reported value.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let last_value = RwSignal::new(None::<String>);
    let on_new_value = Callback::new(move |value: String| {
        log::info!("ticket count is now {value}");
        last_value.set(Some(value));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/count-stepper.css"/>
        <Title text="Count Stepper"/>

        <main class="stepper-demo">
            <CountStepper
                input_id="ticket-count"
                label_text="Tickets:"
                min=1_i64
                max=9_i64
                default_value=1_i64
                on_new_value=on_new_value
            />
            <p class="stepper-demo__last-value">
                {move || match last_value.get() {
                    Some(value) => format!("Last value: {value}"),
                    None => "No changes yet".to_owned(),
                }}
            </p>
        </main>
    }
}
