//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport-agnostic adapter (token injection, status
//! handling), `api` maps endpoints onto it, and `types` defines the wire
//! schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub mod http;
pub mod types;
