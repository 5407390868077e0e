//! Networking modules for the tracker REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and defines the auth seam the session guard
//! depends on; `types` defines the shared wire schema.

pub mod api;
pub mod types;
