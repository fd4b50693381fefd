//! Owner details: the owner, then every pet's visit history.

#[cfg(test)]
#[path = "owner_details_test.rs"]
mod owner_details_test;

use futures::future::join_all;

use super::logged;
use crate::net::api::PetClinicApi;
use crate::net::http::HttpTransport;
use crate::net::types::Owner;

/// Load the owner and, concurrently, the visits of each pet.
///
/// A pet whose visits fail to load gets an empty visit list; only the
/// owner read can fail the view.
///
/// # Errors
///
/// Returns the logged failure message when the owner cannot be read.
pub async fn activate<T: HttpTransport>(api: &PetClinicApi<T>, owner_id: i64) -> Result<Owner, String> {
    let mut owner = logged("Error loading owner details", api.get_owner(owner_id).await)?;

    let fetches = owner.pets.iter().map(|pet| async move {
        match pet.id {
            Some(pet_id) => {
                let context = format!("Error loading visits for pet {pet_id}");
                logged(&context, api.list_pet_visits(pet_id).await).unwrap_or_default()
            }
            None => Vec::new(),
        }
    });
    let visits = join_all(fetches).await;

    for (pet, pet_visits) in owner.pets.iter_mut().zip(visits) {
        pet.visits = pet_visits;
    }
    Ok(owner)
}
