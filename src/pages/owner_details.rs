//! Owner details page: owner info, pets, and each pet's visits.

use leptos::prelude::*;

use crate::app::SharedApi;
use crate::components::page_error::PageError;
use crate::net::types::Pet;
use crate::pages::route_id;
use crate::routes::Route;
use crate::state::owners::OwnerDetailsState;

#[component]
pub fn OwnerDetailsPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let state = RwSignal::new(OwnerDetailsState::default());

    match route_id("ownerId") {
        Some(owner_id) => {
            state.update(OwnerDetailsState::begin_load);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::controllers::owner_details::activate(&api, owner_id).await;
                state.update(|s| s.finish_load(result));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (api, owner_id);
        }
        None => state.update(|s| s.error = Some("Unknown owner.".to_owned())),
    }

    view! {
        <section class="owner-details">
            <h2>"Owner Information"</h2>
            <PageError error=Signal::derive(move || state.get().error)/>
            {move || {
                state
                    .get()
                    .owner
                    .map(|owner| {
                        let owner_id = owner.id.unwrap_or_default();
                        let name = owner.full_name();
                        let edit_href = Route::EditOwner { owner_id }.path();
                        let new_pet_href = Route::NewPet { owner_id }.path();
                        view! {
                            <table class="table table-striped">
                                <tr><th>"Name"</th><td><b>{name}</b></td></tr>
                                <tr><th>"Address"</th><td>{owner.address}</td></tr>
                                <tr><th>"City"</th><td>{owner.city}</td></tr>
                                <tr><th>"Telephone"</th><td>{owner.telephone}</td></tr>
                            </table>
                            <a class="btn btn-default" href=edit_href>"Edit Owner"</a>
                            <a class="btn btn-default" href=new_pet_href>"Add New Pet"</a>

                            <h2>"Pets and Visits"</h2>
                            <table class="table table-striped">
                                {owner
                                    .pets
                                    .into_iter()
                                    .map(|pet| pet_row(owner_id, pet))
                                    .collect::<Vec<_>>()}
                            </table>
                        }
                    })
            }}
        </section>
    }
}

fn pet_row(owner_id: i64, pet: Pet) -> impl IntoView {
    let pet_id = pet.id.unwrap_or_default();
    let type_name = pet.pet_type.map(|t| t.name).unwrap_or_default();
    let edit_href = Route::EditPet { owner_id, pet_id }.path();
    let visit_href = Route::Visits { owner_id, pet_id }.path();
    view! {
        <tr>
            <td>
                <dl class="dl-horizontal">
                    <dt>"Name"</dt>
                    <dd>{pet.name}</dd>
                    <dt>"Birth Date"</dt>
                    <dd>{pet.birth_date.unwrap_or_default()}</dd>
                    <dt>"Type"</dt>
                    <dd>{type_name}</dd>
                </dl>
            </td>
            <td>
                <table class="table-condensed">
                    <thead>
                        <tr>
                            <th>"Visit Date"</th>
                            <th>"Description"</th>
                        </tr>
                    </thead>
                    {pet
                        .visits
                        .into_iter()
                        .map(|visit| {
                            view! {
                                <tr>
                                    <td>{visit.date.unwrap_or_default()}</td>
                                    <td>{visit.description}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <tr>
                        <td><a href=edit_href>"Edit Pet"</a></td>
                        <td><a href=visit_href>"Add Visit"</a></td>
                    </tr>
                </table>
            </td>
        </tr>
    }
}
