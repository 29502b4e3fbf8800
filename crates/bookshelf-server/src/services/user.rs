//! User service: registration and login.

use std::sync::Arc;

use bookshelf_core::params::{TokenData, UserRequest};
use bookshelf_core::response::CustomError;
use bookshelf_core::validate::Validate;
use bookshelf_store::{NewUser, UserRepository};

use crate::auth::{self, TokenService};

/// Registration and login orchestration.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Register a new user, storing only the password hash.
    pub async fn register(&self, request: &UserRequest) -> Result<(), CustomError> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await
            .is_ok()
        {
            return Err(CustomError::bad_request_with_info("username already exists"));
        }

        let password_hash =
            auth::hash_password(&request.password).map_err(|_| CustomError::general())?;

        let user = NewUser {
            username: request.username.clone(),
            password_hash,
        };
        self.repository.create(&user).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
            CustomError::bad_request()
        })?;

        tracing::info!(username = %request.username, "User registered");
        Ok(())
    }

    /// Verify credentials and issue a session token.
    pub async fn login(&self, request: &UserRequest) -> Result<TokenData, CustomError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(&request.username)
            .await
            .map_err(|_| CustomError::not_found())?;

        if !auth::verify_password(&request.password, &user.password_hash) {
            return Err(CustomError::general());
        }

        let token = self
            .tokens
            .generate(user.id)
            .map_err(|e| CustomError::general_with_info(e.to_string()))?;

        tracing::info!(user_id = user.id, username = %user.username, "User logged in");
        Ok(TokenData { token })
    }
}
