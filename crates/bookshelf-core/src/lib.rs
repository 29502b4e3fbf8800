//! bookshelf-core: shared contracts for the Bookshelf API.
//!
//! This crate provides:
//! - The uniform success/error response envelopes
//! - Declarative per-field request validation
//! - Request and response parameter types for every endpoint
//!
//! Nothing here touches HTTP or storage; both the server and its tests
//! consume these types unchanged, which keeps the wire contract in one
//! place.

pub mod params;
pub mod response;
pub mod validate;

// Re-exports for convenience
pub use params::{
    AuthorData, AuthorRequest, BookData, BookRequest, TokenData, UserRequest, DATE_FORMAT,
};
pub use response::{CustomError, ErrorInfo, SuccessResponse};
pub use validate::{Rules, Validate};
