//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one view-model signal, runs its controller on activation
//! and submit, and delegates rendering details to `components`.

pub mod owner_details;
pub mod owner_form;
pub mod owner_list;
pub mod pet_form;
pub mod vet_list;
pub mod visits;
pub mod welcome;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::parse_id;

/// Read a numeric route parameter; missing or malformed means `None`.
pub(crate) fn route_id(name: &str) -> Option<i64> {
    let params = use_params_map().get_untracked();
    parse_id(params.get(name).as_deref())
}
