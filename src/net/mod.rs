//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and body codec, and `types` defines the
//! request/response schema.

pub mod api;
pub mod types;
