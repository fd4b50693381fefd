//! Typed REST client for the pet clinic backend.
//!
//! Every operation builds its URL from the injected [`ApiConfig`] and goes
//! through an [`HttpTransport`], so the same client runs against `fetch` in
//! the browser and against a scripted transport in tests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>`; non-2xx statuses surface as
//! `ApiError::Status` so the chat path can classify them. Write operations
//! ignore the response body.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{BrowserTransport, HttpRequest, HttpResponse, HttpTransport};
use super::types::{
    GenAiReply, GenAiRequest, Owner, OwnerRequest, Pet, PetRequest, PetType, Vet, Visit,
    VisitRequest,
};
use crate::config::ApiConfig;

/// REST client shared by all view controllers.
#[derive(Debug, Clone)]
pub struct PetClinicApi<T = BrowserTransport> {
    config: ApiConfig,
    transport: T,
}

impl PetClinicApi<BrowserTransport> {
    /// Client that talks to the backend through the browser.
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, BrowserTransport)
    }
}

impl<T: HttpTransport> PetClinicApi<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // OWNERS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an owner list.
    pub async fn list_owners(&self) -> Result<Vec<Owner>, ApiError> {
        self.get_json(owners_endpoint(&self.config)).await
    }

    /// Fetch one owner with nested pets.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an owner.
    pub async fn get_owner(&self, owner_id: i64) -> Result<Owner, ApiError> {
        self.get_json(owner_endpoint(&self.config, owner_id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_owner(&self, owner: &OwnerRequest) -> Result<(), ApiError> {
        self.post_json(owner_create_endpoint(&self.config), owner).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_owner(&self, owner_id: i64, owner: &OwnerRequest) -> Result<(), ApiError> {
        self.put_json(owner_endpoint(&self.config, owner_id), owner).await
    }

    // =========================================================================
    // PETS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a type list.
    pub async fn list_pet_types(&self) -> Result<Vec<PetType>, ApiError> {
        self.get_json(pet_types_endpoint(&self.config)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a pet.
    pub async fn get_pet(&self, owner_id: i64, pet_id: i64) -> Result<Pet, ApiError> {
        self.get_json(pet_endpoint(&self.config, owner_id, pet_id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_pet(&self, owner_id: i64, pet: &PetRequest) -> Result<(), ApiError> {
        self.post_json(pets_endpoint(&self.config, owner_id), pet).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_pet(&self, owner_id: i64, pet_id: i64, pet: &PetRequest) -> Result<(), ApiError> {
        self.put_json(pet_endpoint(&self.config, owner_id, pet_id), pet).await
    }

    // =========================================================================
    // VETS / VISITS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a vet list.
    pub async fn list_vets(&self) -> Result<Vec<Vet>, ApiError> {
        self.get_json(vets_endpoint(&self.config)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a visit list.
    pub async fn list_visits(&self) -> Result<Vec<Visit>, ApiError> {
        self.get_json(visits_endpoint(&self.config)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a visit list.
    pub async fn list_pet_visits(&self, pet_id: i64) -> Result<Vec<Visit>, ApiError> {
        self.get_json(pet_visits_endpoint(&self.config, pet_id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_visit(&self, pet_id: i64, visit: &VisitRequest) -> Result<(), ApiError> {
        self.post_json(pet_visits_endpoint(&self.config, pet_id), visit).await
    }

    // =========================================================================
    // GENAI
    // =========================================================================

    /// Ask the GenAI service a question.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-2xx responses, `ApiError::Decode`
    /// when the body is not JSON at all.
    pub async fn ask_genai(&self, question: &str) -> Result<GenAiReply, ApiError> {
        let url = genai_endpoint(&self.config);
        let body = encode(&GenAiRequest { question: question.to_owned() })?;
        let resp = self.execute(HttpRequest::post(url, body)).await?;
        decode::<serde_json::Value>(&resp).map(|body| GenAiReply::from(&body))
    }

    // =========================================================================
    // PLUMBING
    // =========================================================================

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status, body: resp.body });
        }
        Ok(resp)
    }

    async fn get_json<R: DeserializeOwned>(&self, url: String) -> Result<R, ApiError> {
        let resp = self.execute(HttpRequest::get(url)).await?;
        decode(&resp)
    }

    async fn post_json<B: Serialize>(&self, url: String, body: &B) -> Result<(), ApiError> {
        self.execute(HttpRequest::post(url, encode(body)?)).await.map(|_| ())
    }

    async fn put_json<B: Serialize>(&self, url: String, body: &B) -> Result<(), ApiError> {
        self.execute(HttpRequest::put(url, encode(body)?)).await.map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn customers(config: &ApiConfig) -> String {
    format!("{}{}", config.base_url, config.customers_prefix)
}

fn owners_endpoint(config: &ApiConfig) -> String {
    format!("{}/owners", customers(config))
}

fn owner_endpoint(config: &ApiConfig, owner_id: i64) -> String {
    format!("{}/owners/{owner_id}", customers(config))
}

fn owner_create_endpoint(config: &ApiConfig) -> String {
    customers(config)
}

fn pet_types_endpoint(config: &ApiConfig) -> String {
    format!("{}/petTypes", customers(config))
}

fn pets_endpoint(config: &ApiConfig, owner_id: i64) -> String {
    format!("{}/owners/{owner_id}/pets", customers(config))
}

fn pet_endpoint(config: &ApiConfig, owner_id: i64, pet_id: i64) -> String {
    format!("{}/owners/{owner_id}/pets/{pet_id}", customers(config))
}

fn vets_endpoint(config: &ApiConfig) -> String {
    format!("{}{}/vets", config.base_url, config.vets_prefix)
}

fn visits_endpoint(config: &ApiConfig) -> String {
    format!("{}{}", config.base_url, config.visits_prefix)
}

fn pet_visits_endpoint(config: &ApiConfig, pet_id: i64) -> String {
    format!("{}{}/owners/*/pets/{pet_id}/visits", config.base_url, config.visits_prefix)
}

fn genai_endpoint(config: &ApiConfig) -> String {
    format!("{}{}", config.base_url, config.genai_path)
}
