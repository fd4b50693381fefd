#[cfg(test)]
#[path = "owner_list_test.rs"]
mod owner_list_test;

use super::logged;
use crate::net::api::PetClinicApi;
use crate::net::http::HttpTransport;
use crate::net::types::Owner;

/// Load every owner.
///
/// # Errors
///
/// Returns the logged failure message.
pub async fn activate<T: HttpTransport>(api: &PetClinicApi<T>) -> Result<Vec<Owner>, String> {
    logged("Error loading owners", api.list_owners().await)
}
