//! Network layer: wire DTOs and the REST API client.
//!
//! DESIGN
//! ======
//! `types` mirrors the backend's JSON exactly; `api` owns transport, auth
//! headers, and error mapping.

pub mod api;
pub mod types;
