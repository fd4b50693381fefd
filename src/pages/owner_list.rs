//! Owner list page.

use leptos::prelude::*;

use crate::app::SharedApi;
use crate::components::page_error::PageError;
use crate::routes::Route;
use crate::state::owners::OwnerListState;

#[component]
pub fn OwnerListPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let state = RwSignal::new(OwnerListState::default());

    state.update(OwnerListState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::controllers::owner_list::activate(&api).await;
        state.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <section class="owner-list">
            <h2>"Owners"</h2>
            <PageError error=Signal::derive(move || state.get().error)/>
            <Show when=move || !state.get().loading fallback=|| view! { <p>"Loading owners..."</p> }>
                <table class="table table-striped">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Address"</th>
                            <th>"City"</th>
                            <th>"Telephone"</th>
                            <th>"Pets"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .get()
                                .owners
                                .into_iter()
                                .map(|owner| {
                                    let name = owner.full_name();
                                    let details = owner.id.map(|owner_id| Route::OwnerDetails { owner_id }.path());
                                    let pets = owner.pets.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(" ");
                                    view! {
                                        <tr>
                                            <td><a href=details>{name}</a></td>
                                            <td>{owner.address}</td>
                                            <td>{owner.city}</td>
                                            <td>{owner.telephone}</td>
                                            <td>{pets}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <a class="btn btn-default" href=Route::NewOwner.path()>"Add Owner"</a>
        </section>
    }
}
