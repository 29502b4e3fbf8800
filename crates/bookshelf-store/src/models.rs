//! Database row and insert models for the storage layer.
//!
//! These types map directly to database rows for sqlx queries. They are
//! separate from the wire-facing types in bookshelf-core; the services
//! translate between the two.

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database row for the `authors` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AuthorRow {
    pub id: i64,
    pub name: String,
    pub birthdate: NaiveDate,
}

/// Input for creating or updating an author.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub birthdate: NaiveDate,
}

/// Database row for the `books` table with the referenced author
/// eager-loaded via LEFT JOIN.
///
/// The author columns are optional: a book may carry a dangling
/// `author_id`, since creation does not verify the reference.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub author_birthdate: Option<NaiveDate>,
}

/// Input for creating or updating a book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub author_id: i64,
}

/// Database row for the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
