//! bookshelf-server: HTTP API server for the Bookshelf catalog.
//!
//! This crate provides:
//! - REST endpoints for authors, books, and user registration/login
//! - Bearer-token authorization gating the author and book routes
//! - Entity services composed over the repository contracts
//! - The uniform success/error envelope at the transport boundary
//!
//! # Architecture
//!
//! The server is built on Axum. Requests to protected routes pass the
//! authorization middleware, then the route handler delegates to the
//! entity service, which validates the request, calls the repository,
//! and maps the result into the response envelope.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_server::{config::ServerConfig, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(store, config);
//! let app = bookshelf_server::routes::build_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use bookshelf_core;
pub use bookshelf_store;
