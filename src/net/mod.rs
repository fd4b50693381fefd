//! Networking modules for the pet clinic REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam (browser `fetch` via `gloo-net`, scripted in
//! tests), `api` maps each backend operation onto it, `types` defines the
//! wire schema, and `error` the failure taxonomy shared by all controllers.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
