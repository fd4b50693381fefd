//! Owner create/edit form.

#[cfg(test)]
#[path = "owner_form_test.rs"]
mod owner_form_test;

use super::logged;
use crate::net::api::PetClinicApi;
use crate::net::http::HttpTransport;
use crate::net::types::Owner;
use crate::routes::Route;

/// Load the owner being edited, or start from an empty owner.
///
/// # Errors
///
/// Returns the logged failure message when the owner cannot be read.
pub async fn activate<T: HttpTransport>(api: &PetClinicApi<T>, owner_id: Option<i64>) -> Result<Owner, String> {
    match owner_id {
        Some(id) => logged("Error loading owner", api.get_owner(id).await),
        None => Ok(Owner::default()),
    }
}

/// Update the owner when it has an id, create it otherwise.
///
/// Returns the view to show next: the owner's details after an update,
/// the owner list after a create.
///
/// # Errors
///
/// Returns the logged failure message when the write fails.
pub async fn submit<T: HttpTransport>(api: &PetClinicApi<T>, owner: &Owner) -> Result<Route, String> {
    let body = owner.to_request();
    match owner.id {
        Some(owner_id) => {
            logged("Error updating owner", api.update_owner(owner_id, &body).await)?;
            Ok(Route::OwnerDetails { owner_id })
        }
        None => {
            logged("Error creating owner", api.create_owner(&body).await)?;
            Ok(Route::Owners)
        }
    }
}
