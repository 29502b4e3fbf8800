//! In-memory repository implementations.
//!
//! These back the service and router tests, standing in for the SQLite
//! store behind the same capability traits. Book reads resolve the
//! referenced author from the linked author repository, mirroring the
//! store's eager-loading JOIN.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{AuthorRow, BookRow, NewAuthor, NewBook, NewUser, UserRow};
use crate::repository::{AuthorRepository, BookRepository, UserRepository};

/// In-memory author repository.
#[derive(Debug, Default)]
pub struct InMemoryAuthorRepository {
    rows: RwLock<Vec<AuthorRow>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch an author without the not-found error, for book resolution.
    async fn get(&self, id: i64) -> Option<AuthorRow> {
        self.rows.read().await.iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i64) -> StoreResult<AuthorRow> {
        self.get(id).await.ok_or(StoreError::AuthorNotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<AuthorRow>> {
        Ok(self.rows.read().await.clone())
    }

    async fn create(&self, author: &NewAuthor) -> StoreResult<i64> {
        let mut rows = self.rows.write().await;
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        rows.push(AuthorRow {
            id,
            name: author.name.clone(),
            birthdate: author.birthdate,
        });
        Ok(id)
    }

    async fn update(&self, id: i64, author: &NewAuthor) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::AuthorNotFound(id))?;
        row.name = author.name.clone();
        row.birthdate = author.birthdate;
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(StoreError::AuthorNotFound(id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct StoredBook {
    id: i64,
    title: String,
    isbn: String,
    author_id: i64,
}

/// In-memory book repository, resolving authors through the linked
/// author repository.
#[derive(Debug)]
pub struct InMemoryBookRepository {
    authors: Arc<InMemoryAuthorRepository>,
    rows: RwLock<Vec<StoredBook>>,
}

impl InMemoryBookRepository {
    pub fn new(authors: Arc<InMemoryAuthorRepository>) -> Self {
        Self {
            authors,
            rows: RwLock::new(Vec::new()),
        }
    }

    async fn to_row(&self, stored: &StoredBook) -> BookRow {
        let author = self.authors.get(stored.author_id).await;
        BookRow {
            id: stored.id,
            title: stored.title.clone(),
            isbn: stored.isbn.clone(),
            author_id: stored.author_id,
            author_name: author.as_ref().map(|a| a.name.clone()),
            author_birthdate: author.map(|a| a.birthdate),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_id(&self, id: i64) -> StoreResult<BookRow> {
        let stored = self
            .rows
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::BookNotFound(id))?;
        Ok(self.to_row(&stored).await)
    }

    async fn list(&self) -> StoreResult<Vec<BookRow>> {
        let stored = self.rows.read().await.clone();
        let mut rows = Vec::with_capacity(stored.len());
        for book in &stored {
            rows.push(self.to_row(book).await);
        }
        Ok(rows)
    }

    async fn create(&self, book: &NewBook) -> StoreResult<i64> {
        let mut rows = self.rows.write().await;
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        rows.push(StoredBook {
            id,
            title: book.title.clone(),
            isbn: book.isbn.clone(),
            author_id: book.author_id,
        });
        Ok(id)
    }

    async fn update(&self, id: i64, book: &NewBook) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::BookNotFound(id))?;
        row.title = book.title.clone();
        row.isbn = book.isbn.clone();
        row.author_id = book.author_id;
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(StoreError::BookNotFound(id));
        }
        Ok(())
    }
}

/// In-memory user repository.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<UserRow>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> StoreResult<UserRow> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.username == username)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
    }

    async fn create(&self, user: &NewUser) -> StoreResult<UserRow> {
        let mut rows = self.rows.write().await;
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let row = UserRow {
            id,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn birthdate(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn author_crud_round_trip() {
        let repo = InMemoryAuthorRepository::new();
        let id = repo
            .create(&NewAuthor {
                name: "Ursula K. Le Guin".to_string(),
                birthdate: birthdate("1929-10-21"),
            })
            .await
            .unwrap();

        let row = repo.find_by_id(id).await.unwrap();
        assert_eq!(row.name, "Ursula K. Le Guin");
        assert_eq!(row.birthdate, birthdate("1929-10-21"));

        repo.update(
            id,
            &NewAuthor {
                name: "U. K. Le Guin".to_string(),
                birthdate: birthdate("1929-10-21"),
            },
        )
        .await
        .unwrap();
        assert_eq!(repo.find_by_id(id).await.unwrap().name, "U. K. Le Guin");

        repo.delete(id).await.unwrap();
        assert!(matches!(
            repo.find_by_id(id).await,
            Err(StoreError::AuthorNotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_missing_author_fails() {
        let repo = InMemoryAuthorRepository::new();
        assert!(matches!(
            repo.delete(99).await,
            Err(StoreError::AuthorNotFound(99))
        ));
    }

    #[tokio::test]
    async fn book_reads_resolve_linked_author() {
        let authors = Arc::new(InMemoryAuthorRepository::new());
        let author_id = authors
            .create(&NewAuthor {
                name: "Ursula K. Le Guin".to_string(),
                birthdate: birthdate("1929-10-21"),
            })
            .await
            .unwrap();

        let books = InMemoryBookRepository::new(authors);
        let book_id = books
            .create(&NewBook {
                title: "The Dispossessed".to_string(),
                isbn: "978-0-06-051275-5".to_string(),
                author_id,
            })
            .await
            .unwrap();

        let row = books.find_by_id(book_id).await.unwrap();
        assert_eq!(row.author_name.as_deref(), Some("Ursula K. Le Guin"));
        assert_eq!(row.author_birthdate, Some(birthdate("1929-10-21")));
    }

    #[tokio::test]
    async fn dangling_book_reference_reads_as_none() {
        let books = InMemoryBookRepository::new(Arc::new(InMemoryAuthorRepository::new()));
        let book_id = books
            .create(&NewBook {
                title: "Orphan".to_string(),
                isbn: "none".to_string(),
                author_id: 42,
            })
            .await
            .unwrap();

        let row = books.find_by_id(book_id).await.unwrap();
        assert_eq!(row.author_id, 42);
        assert!(row.author_name.is_none());
        assert!(row.author_birthdate.is_none());
    }

    #[tokio::test]
    async fn user_create_and_lookup() {
        let repo = InMemoryUserRepository::new();
        let row = repo
            .create(&NewUser {
                username: "alice".to_string(),
                password_hash: "$argon2id$stub".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(row.id, 1);

        let found = repo.find_by_username("alice").await.unwrap();
        assert_eq!(found, row);
        assert!(matches!(
            repo.find_by_username("bob").await,
            Err(StoreError::UserNotFound(_))
        ));
    }
}
