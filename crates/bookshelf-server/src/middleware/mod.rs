//! Middleware for the HTTP API.

pub mod auth;

pub use auth::{AuthId, check_auth};
