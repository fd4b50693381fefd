//! Veterinarian list page.

use leptos::prelude::*;

use crate::app::SharedApi;
use crate::components::page_error::PageError;
use crate::state::vets::VetListState;

#[component]
pub fn VetListPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let state = RwSignal::new(VetListState::default());

    state.update(VetListState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::controllers::vet_list::activate(&api).await;
        state.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <section class="vet-list">
            <h2>"Veterinarians"</h2>
            <PageError error=Signal::derive(move || state.get().error)/>
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Specialties"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .get()
                            .vets
                            .into_iter()
                            .map(|vet| {
                                let specialties = vet.specialties_label();
                                view! {
                                    <tr>
                                        <td>{vet.first_name}" "{vet.last_name}</td>
                                        <td>{specialties}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}
