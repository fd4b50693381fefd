//! Visit list and new-visit submission.

#[cfg(test)]
#[path = "visits_test.rs"]
mod visits_test;

use super::logged;
use crate::net::api::PetClinicApi;
use crate::net::http::HttpTransport;
use crate::net::types::{Visit, VisitRequest};
use crate::routes::Route;

/// Load the visit list.
///
/// # Errors
///
/// Returns the logged failure message.
pub async fn activate<T: HttpTransport>(api: &PetClinicApi<T>) -> Result<Vec<Visit>, String> {
    logged("Error loading visits", api.list_visits().await)
}

/// Record a visit for `pet_id`, then show the owner's details.
///
/// # Errors
///
/// Returns the logged failure message when the write fails.
pub async fn submit<T: HttpTransport>(
    api: &PetClinicApi<T>,
    owner_id: i64,
    pet_id: i64,
    visit: &VisitRequest,
) -> Result<Route, String> {
    logged("Error creating visit", api.create_visit(pet_id, visit).await)?;
    Ok(Route::OwnerDetails { owner_id })
}
