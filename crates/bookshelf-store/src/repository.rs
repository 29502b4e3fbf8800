//! Repository capability traits.
//!
//! Services are composed over these contracts rather than the concrete
//! SQLite store, so a test double can stand in without touching a
//! database. The [`Store`](crate::Store) implements all three; the
//! [`memory`](crate::memory) module provides in-memory counterparts.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{AuthorRow, BookRow, NewAuthor, NewBook, NewUser, UserRow};

/// Persistence operations for authors.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Fetch one author, failing with `AuthorNotFound` when absent.
    async fn find_by_id(&self, id: i64) -> StoreResult<AuthorRow>;

    /// Fetch all authors.
    async fn list(&self) -> StoreResult<Vec<AuthorRow>>;

    /// Insert an author and return its assigned id.
    async fn create(&self, author: &NewAuthor) -> StoreResult<i64>;

    /// Overwrite an existing author's fields.
    async fn update(&self, id: i64, author: &NewAuthor) -> StoreResult<()>;

    /// Delete an author, failing with `AuthorNotFound` when absent.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Persistence operations for books. Reads eager-load the referenced
/// author.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Fetch one book, failing with `BookNotFound` when absent.
    async fn find_by_id(&self, id: i64) -> StoreResult<BookRow>;

    /// Fetch all books.
    async fn list(&self) -> StoreResult<Vec<BookRow>>;

    /// Insert a book and return its assigned id. The author reference is
    /// persisted as given; existence is the caller's concern.
    async fn create(&self, book: &NewBook) -> StoreResult<i64>;

    /// Overwrite an existing book's fields.
    async fn update(&self, id: i64, book: &NewBook) -> StoreResult<()>;

    /// Delete a book, failing with `BookNotFound` when absent.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by username, failing with `UserNotFound` when absent.
    async fn find_by_username(&self, username: &str) -> StoreResult<UserRow>;

    /// Insert a user and return the stored row.
    async fn create(&self, user: &NewUser) -> StoreResult<UserRow>;
}
