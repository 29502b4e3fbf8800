//! Application state shared across handlers.

use std::sync::Arc;

use bookshelf_store::{AuthorRepository, BookRepository, Store, UserRepository};

use crate::auth::TokenService;
use crate::config::ServerConfig;
use crate::services::{AuthorService, BookService, UserService};

/// Application state shared across all handlers.
///
/// Cloneable; extracted in handlers with `State<AppState>`. All wiring
/// happens here at construction time: services receive their repository
/// contracts and the token service receives the configured secret, so
/// there is no ambient global lookup anywhere below.
#[derive(Clone)]
pub struct AppState {
    authors: Arc<AuthorService>,
    books: Arc<BookService>,
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the state over the SQLite store.
    pub fn new(store: Store, config: ServerConfig) -> Self {
        let store = Arc::new(store);
        Self::from_repositories(store.clone(), store.clone(), store, config)
    }

    /// Wire the state over arbitrary repository implementations.
    ///
    /// Tests use this with the in-memory repositories.
    pub fn from_repositories(
        authors: Arc<dyn AuthorRepository>,
        books: Arc<dyn BookRepository>,
        users: Arc<dyn UserRepository>,
        config: ServerConfig,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(
            &config.jwt_secret,
            config.jwt_expiry_hours,
        ));
        Self {
            books: Arc::new(BookService::new(books, authors.clone())),
            authors: Arc::new(AuthorService::new(authors)),
            users: Arc::new(UserService::new(users, tokens.clone())),
            tokens,
            config: Arc::new(config),
        }
    }

    /// Get the author service.
    pub fn authors(&self) -> &AuthorService {
        &self.authors
    }

    /// Get the book service.
    pub fn books(&self) -> &BookService {
        &self.books
    }

    /// Get the user service.
    pub fn users(&self) -> &UserService {
        &self.users
    }

    /// Get the token service.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
