//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Author not found.
    #[error("author not found: {0}")]
    AuthorNotFound(i64),

    /// Book not found.
    #[error("book not found: {0}")]
    BookNotFound(i64),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
