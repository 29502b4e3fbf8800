//! SQLite store implementation.
//!
//! The `Store` type implements the repository traits over a sqlx
//! connection pool. Book reads eager-load the referenced author with a
//! LEFT JOIN so a dangling reference still yields the book.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::{StoreError, StoreResult};
use crate::models::{AuthorRow, BookRow, NewAuthor, NewBook, NewUser, UserRow};
use crate::repository::{AuthorRepository, BookRepository, UserRepository};
use crate::schema;

/// Configuration for connecting to the database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database connection URL.
    pub database_url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Run migrations on connect.
    pub run_migrations: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://bookshelf.db?mode=rwc".to_string(),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `DATABASE_URL` - Required database connection string
    /// - `DATABASE_MAX_CONNECTIONS` - Optional, defaults to 5
    /// - `DATABASE_RUN_MIGRATIONS` - Optional, defaults to true
    pub fn from_env() -> StoreResult<Self> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            StoreError::Config("DATABASE_URL environment variable not set".to_string())
        })?;

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let run_migrations = std::env::var("DATABASE_RUN_MIGRATIONS")
            .ok()
            .map(|s| s.to_lowercase() != "false" && s != "0")
            .unwrap_or(true);

        Ok(Self {
            database_url,
            max_connections,
            run_migrations,
        })
    }
}

/// SQLite-backed store for authors, books, and users.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database with the given configuration.
    ///
    /// Optionally runs migrations if `config.run_migrations` is true.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        tracing::info!("Connected to database");

        if config.run_migrations {
            schema::run_migrations(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Create a store from an existing connection pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AuthorRepository for Store {
    async fn find_by_id(&self, id: i64) -> StoreResult<AuthorRow> {
        sqlx::query_as::<_, AuthorRow>(
            r#"SELECT id, name, birthdate FROM authors WHERE id = ?1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::AuthorNotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<AuthorRow>> {
        Ok(sqlx::query_as::<_, AuthorRow>(
            r#"SELECT id, name, birthdate FROM authors ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create(&self, author: &NewAuthor) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO authors (name, birthdate) VALUES (?1, ?2) RETURNING id"#,
        )
        .bind(&author.name)
        .bind(author.birthdate)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, author: &NewAuthor) -> StoreResult<()> {
        let result = sqlx::query(r#"UPDATE authors SET name = ?2, birthdate = ?3 WHERE id = ?1"#)
            .bind(id)
            .bind(&author.name)
            .bind(author.birthdate)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::AuthorNotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query(r#"DELETE FROM authors WHERE id = ?1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::AuthorNotFound(id));
        }
        Ok(())
    }
}

/// Shared SELECT for book rows with the author eager-loaded.
const BOOK_SELECT: &str = r#"
    SELECT b.id, b.title, b.isbn, b.author_id,
           a.name AS author_name, a.birthdate AS author_birthdate
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

#[async_trait]
impl BookRepository for Store {
    async fn find_by_id(&self, id: i64) -> StoreResult<BookRow> {
        sqlx::query_as::<_, BookRow>(&format!("{BOOK_SELECT} WHERE b.id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::BookNotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<BookRow>> {
        Ok(
            sqlx::query_as::<_, BookRow>(&format!("{BOOK_SELECT} ORDER BY b.id"))
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create(&self, book: &NewBook) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO books (title, isbn, author_id) VALUES (?1, ?2, ?3) RETURNING id"#,
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, book: &NewBook) -> StoreResult<()> {
        let result = sqlx::query(
            r#"UPDATE books SET title = ?2, isbn = ?3, author_id = ?4 WHERE id = ?1"#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.author_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::BookNotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query(r#"DELETE FROM books WHERE id = ?1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::BookNotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for Store {
    async fn find_by_username(&self, username: &str) -> StoreResult<UserRow> {
        sqlx::query_as::<_, UserRow>(
            r#"SELECT id, username, password_hash FROM users WHERE username = ?1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
    }

    async fn create(&self, user: &NewUser) -> StoreResult<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES (?1, ?2)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
        assert!(config.database_url.starts_with("sqlite://"));
    }

    #[test]
    fn book_select_joins_authors() {
        assert!(BOOK_SELECT.contains("LEFT JOIN authors"));
        assert!(BOOK_SELECT.contains("author_birthdate"));
    }
}
