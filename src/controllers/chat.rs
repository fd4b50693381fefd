//! Chat exchange with the GenAI service.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::PetClinicApi;
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::net::types::GenAiReply;

/// Send `question` and return the outcome for the bot bubble.
///
/// Failures are logged and handed back unchanged so the status code can
/// select the visible message.
pub async fn ask<T: HttpTransport>(api: &PetClinicApi<T>, question: &str) -> Result<GenAiReply, ApiError> {
    let outcome = api.ask_genai(question).await;
    if let Err(err) = &outcome {
        leptos::logging::error!("Error: {err}");
    }
    outcome
}
