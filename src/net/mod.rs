//! Networking modules for the election REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP exchanges and `types` defines the shared wire
//! schema. Status classification lives with the state that reacts to it.

pub mod api;
pub mod types;
