#[cfg(test)]
#[path = "vet_list_test.rs"]
mod vet_list_test;

use super::logged;
use crate::net::api::PetClinicApi;
use crate::net::http::HttpTransport;
use crate::net::types::Vet;

/// Load every vet.
///
/// # Errors
///
/// Returns the logged failure message.
pub async fn activate<T: HttpTransport>(api: &PetClinicApi<T>) -> Result<Vec<Vet>, String> {
    logged("Error loading vets", api.list_vets().await)
}
