//! Pet create/edit form nested under an owner.

#[cfg(test)]
#[path = "pet_form_test.rs"]
mod pet_form_test;

use super::logged;
use crate::net::api::PetClinicApi;
use crate::net::http::HttpTransport;
use crate::net::types::{PetRequest, PetType};
use crate::routes::Route;
use crate::state::pets::PetFormData;

/// Load pet types, then either the pet being edited or the owner a new pet
/// will belong to.
///
/// # Errors
///
/// Returns whatever pet types loaded plus the logged failure message.
pub async fn activate<T: HttpTransport>(
    api: &PetClinicApi<T>,
    owner_id: i64,
    pet_id: Option<i64>,
) -> Result<PetFormData, (Vec<PetType>, String)> {
    let pet_types = logged("Error loading pet types", api.list_pet_types().await).map_err(|e| (Vec::new(), e))?;

    match pet_id {
        Some(pet_id) => match logged("Error loading pet", api.get_pet(owner_id, pet_id).await) {
            Ok(pet) => Ok(PetFormData::editing(pet_types, pet)),
            Err(e) => Err((pet_types, e)),
        },
        None => match logged("Error loading owner", api.get_owner(owner_id).await) {
            Ok(owner) => Ok(PetFormData::creating(pet_types, owner.full_name())),
            Err(e) => Err((pet_types, e)),
        },
    }
}

/// Update the pet when the request carries an id, create it otherwise.
/// Either way the owner's details come next.
///
/// # Errors
///
/// Returns the logged failure message when the write fails.
pub async fn submit<T: HttpTransport>(api: &PetClinicApi<T>, owner_id: i64, pet: &PetRequest) -> Result<Route, String> {
    if pet.id == 0 {
        logged("Error creating pet", api.create_pet(owner_id, pet).await)?;
    } else {
        logged("Error updating pet", api.update_pet(owner_id, pet.id, pet).await)?;
    }
    Ok(Route::OwnerDetails { owner_id })
}
