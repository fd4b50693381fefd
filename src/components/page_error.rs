//! Inline error banner for failed loads and submits.

use leptos::prelude::*;

/// Shows `error` when set; renders nothing otherwise.
#[component]
pub fn PageError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="page-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
