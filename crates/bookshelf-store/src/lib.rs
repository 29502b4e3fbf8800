//! bookshelf-store: persistence layer for the Bookshelf API.
//!
//! This crate provides:
//! - The repository capability traits the services are composed over
//! - A SQLite-backed [`Store`] implementing all of them via sqlx
//! - An in-memory implementation for tests and trait substitution
//! - Embedded schema migration run at connect time
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//! let author = store.find_by_id(1).await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryAuthorRepository, InMemoryBookRepository, InMemoryUserRepository};
pub use models::{AuthorRow, BookRow, NewAuthor, NewBook, NewUser, UserRow};
pub use repository::{AuthorRepository, BookRepository, UserRepository};
pub use store::{Store, StoreConfig};
