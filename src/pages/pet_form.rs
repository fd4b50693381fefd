//! Pet create/edit page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SharedApi;
use crate::components::form_field::FormField;
use crate::components::page_error::PageError;
use crate::pages::route_id;
use crate::state::pets::PetFormState;

#[component]
pub fn PetFormPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<SharedApi>());
    let state = RwSignal::new(PetFormState::default());
    let navigate = use_navigate();
    let owner_id = route_id("ownerId");
    let pet_id = route_id("petId");

    match owner_id {
        Some(owner_id) => {
            state.update(PetFormState::begin_load);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let api = api.get_value();
                let result = crate::controllers::pet_form::activate(&api, owner_id, pet_id).await;
                state.update(|s| s.finish_load(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (owner_id, pet_id);
        }
        None => state.update(|s| s.error = Some("Unknown owner.".to_owned())),
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(owner_id) = owner_id else {
            return;
        };
        if !state.try_update(PetFormState::begin_submit).unwrap_or(false) {
            return;
        }
        let request = state.with_untracked(PetFormState::to_request);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = api.get_value();
            let result = crate::controllers::pet_form::submit(&api, owner_id, &request).await;
            state.update(|s| s.finish_submit(&result));
            if let Ok(next) = result {
                navigate(&next.path(), NavigateOptions::default());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, owner_id, request, navigate);
    };

    view! {
        <section class="pet-form">
            <h2>{move || if state.with(PetFormState::is_new) { "New Pet" } else { "Edit Pet" }}</h2>
            <PageError error=Signal::derive(move || state.get().error)/>
            <form class="form-horizontal" on:submit=on_submit>
                <FormField
                    label="Owner"
                    readonly=true
                    value=Signal::derive(move || state.with(|s| s.pet.owner.clone().unwrap_or_default()))
                    on_input=move |_: String| {}
                />
                <FormField
                    label="Name"
                    value=Signal::derive(move || state.with(|s| s.pet.name.clone()))
                    on_input=move |v: String| state.update(|s| s.pet.name = v)
                />
                <FormField
                    label="Birth Date"
                    input_type="date"
                    value=Signal::derive(move || state.with(|s| s.pet.birth_date.clone().unwrap_or_default()))
                    on_input=move |v: String| state.update(|s| s.pet.birth_date = Some(v))
                />
                <div class="form-group">
                    <label class="control-label">"Type"</label>
                    <select
                        class="form-control"
                        prop:value=move || state.with(|s| s.pet_type_id.to_string())
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                                state.update(|s| s.pet_type_id = id);
                            }
                        }
                    >
                        {move || {
                            let selected = state.with(|s| s.pet_type_id);
                            state
                                .get()
                                .pet_types
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <option value=t.id.to_string() selected=t.id == selected>{t.name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
                <button class="btn btn-default" type="submit" disabled=move || state.get().saving || state.get().loading>
                    {move || if state.with(PetFormState::is_new) { "Add Pet" } else { "Update Pet" }}
                </button>
            </form>
        </section>
    }
}
