//! Owner create/edit page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SharedApi;
use crate::components::form_field::FormField;
use crate::components::page_error::PageError;
use crate::net::types::Owner;
use crate::pages::route_id;
use crate::state::owners::OwnerFormState;

#[component]
pub fn OwnerFormPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<SharedApi>());
    let state = RwSignal::new(OwnerFormState::default());
    let navigate = use_navigate();

    if let Some(owner_id) = route_id("ownerId") {
        state.update(OwnerFormState::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = api.get_value();
            let result = crate::controllers::owner_form::activate(&api, Some(owner_id)).await;
            state.update(|s| s.finish_load(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = owner_id;
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(OwnerFormState::begin_submit).unwrap_or(false) {
            return;
        }
        let owner = state.get_untracked().owner;
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = api.get_value();
            let result = crate::controllers::owner_form::submit(&api, &owner).await;
            state.update(|s| s.finish_submit(&result));
            if let Ok(next) = result {
                navigate(&next.path(), NavigateOptions::default());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, owner, navigate);
    };

    let field = move |label: &'static str, get: fn(&Owner) -> &String, set: fn(&mut Owner, String)| {
        view! {
            <FormField
                label=label
                value=Signal::derive(move || state.with(|s| get(&s.owner).clone()))
                on_input=move |v: String| state.update(|s| set(&mut s.owner, v))
            />
        }
    };

    view! {
        <section class="owner-form">
            <h2>{move || if state.with(OwnerFormState::is_new) { "New Owner" } else { "Edit Owner" }}</h2>
            <PageError error=Signal::derive(move || state.get().error)/>
            <form class="form-horizontal" on:submit=on_submit>
                {field("First Name", |o| &o.first_name, |o, v| o.first_name = v)}
                {field("Last Name", |o| &o.last_name, |o, v| o.last_name = v)}
                {field("Address", |o| &o.address, |o, v| o.address = v)}
                {field("City", |o| &o.city, |o, v| o.city = v)}
                {field("Telephone", |o| &o.telephone, |o, v| o.telephone = v)}
                <button class="btn btn-default" type="submit" disabled=move || state.get().saving || state.get().loading>
                    {move || if state.with(OwnerFormState::is_new) { "Add Owner" } else { "Update Owner" }}
                </button>
            </form>
        </section>
    }
}
