//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the server; `types` defines the few wire
//! shapes that are client-local (everything else comes from the `model`
//! crate).

pub mod api;
pub mod types;
