//! New-visit page with the visit history below the form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SharedApi;
use crate::components::form_field::FormField;
use crate::components::page_error::PageError;
use crate::pages::route_id;
use crate::state::visits::{VisitsState, today};

#[component]
pub fn VisitsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<SharedApi>());
    let state = RwSignal::new(VisitsState::new(today()));
    let navigate = use_navigate();
    let owner_id = route_id("ownerId");
    let pet_id = route_id("petId");

    if state.try_update(|s| s.require_route(owner_id, pet_id)).flatten().is_some() {
        state.update(VisitsState::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = api.get_value();
            let result = crate::controllers::visits::activate(&api).await;
            state.update(|s| s.finish_load(result));
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((owner_id, pet_id)) = state.try_update(|s| s.require_route(owner_id, pet_id)).flatten() else {
            return;
        };
        if !state.try_update(VisitsState::begin_submit).unwrap_or(false) {
            return;
        }
        let request = state.with_untracked(VisitsState::to_request);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = api.get_value();
            let result = crate::controllers::visits::submit(&api, owner_id, pet_id, &request).await;
            state.update(|s| s.finish_submit(&result));
            if let Ok(next) = result {
                navigate(&next.path(), NavigateOptions::default());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, owner_id, pet_id, request, navigate);
    };

    view! {
        <section class="visits">
            <h2>"New Visit"</h2>
            <PageError error=Signal::derive(move || state.get().error)/>
            <form class="form-horizontal" on:submit=on_submit>
                <FormField
                    label="Date"
                    input_type="date"
                    value=Signal::derive(move || state.with(|s| s.date.clone()))
                    on_input=move |v: String| state.update(|s| s.date = v)
                />
                <FormField
                    label="Description"
                    value=Signal::derive(move || state.with(|s| s.description.clone()))
                    on_input=move |v: String| state.update(|s| s.description = v)
                />
                <button class="btn btn-default" type="submit" disabled=move || state.get().saving>
                    "Add Visit"
                </button>
            </form>

            <h3>"Previous Visits"</h3>
            <table class="table table-striped">
                <tr>
                    <th>"Date"</th>
                    <th>"Description"</th>
                </tr>
                {move || {
                    state
                        .with(|s| s.visits_for(pet_id))
                        .into_iter()
                        .map(|visit| {
                            view! {
                                <tr>
                                    <td>{visit.date.unwrap_or_default()}</td>
                                    <td>{visit.description}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </table>
        </section>
    }
}
