//! View controllers: the async read-on-activate and write-on-submit
//! operations behind each page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged once here with its context and handed back as a
//! display string, which the page stores in its view model. Nothing is
//! retried. Chat is the exception: it keeps the `ApiError` so the status
//! code can pick the visible message.

pub mod chat;
pub mod owner_details;
pub mod owner_form;
pub mod owner_list;
pub mod pet_form;
pub mod vet_list;
pub mod visits;

use crate::net::error::ApiError;

/// Log a failed call with `context` and turn it into a display string.
pub(crate) fn logged<T>(context: &str, result: Result<T, ApiError>) -> Result<T, String> {
    result.map_err(|err| {
        let message = format!("{context}: {err}");
        leptos::logging::error!("{message}");
        message
    })
}
