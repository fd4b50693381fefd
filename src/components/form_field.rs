//! Labelled input bound to a string in a page's view model.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="control-label">{label}</label>
            <input
                class="form-control"
                type=input_type
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
