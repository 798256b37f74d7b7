//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the request path (bearer attach, 401/403 branching) and the
//! endpoint calls; `types` defines the shared wire schema.

pub mod api;
pub mod types;
