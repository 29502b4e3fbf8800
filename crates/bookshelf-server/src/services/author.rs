//! Author service.

use std::sync::Arc;

use chrono::NaiveDate;

use bookshelf_core::params::{AuthorData, AuthorRequest, DATE_FORMAT};
use bookshelf_core::response::CustomError;
use bookshelf_core::validate::Validate;
use bookshelf_store::{AuthorRepository, AuthorRow, NewAuthor};

/// CRUD orchestration for authors.
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_detail(&self, id: i64) -> Result<AuthorData, CustomError> {
        let author = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|_| CustomError::not_found())?;

        Ok(author_data(&author))
    }

    pub async fn find_all(&self) -> Result<Vec<AuthorData>, CustomError> {
        let authors = self
            .repository
            .list()
            .await
            .map_err(|_| CustomError::bad_request())?;

        Ok(authors.iter().map(author_data).collect())
    }

    pub async fn create(&self, request: &AuthorRequest) -> Result<(), CustomError> {
        request.validate()?;

        let birthdate = NaiveDate::parse_from_str(&request.birthdate, DATE_FORMAT)
            .map_err(|e| CustomError::bad_request_with_info(format!("Invalid date format: {e}")))?;

        let author = NewAuthor {
            name: request.name.clone(),
            birthdate,
        };
        self.repository.create(&author).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create author");
            CustomError::bad_request()
        })?;

        Ok(())
    }

    pub async fn update(&self, id: i64, request: &AuthorRequest) -> Result<AuthorData, CustomError> {
        request.validate()?;

        // An unparseable birthdate falls back to the default date and the
        // update still goes through.
        let birthdate =
            NaiveDate::parse_from_str(&request.birthdate, DATE_FORMAT).unwrap_or_default();

        let author = NewAuthor {
            name: request.name.clone(),
            birthdate,
        };
        self.repository.update(id, &author).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to update author");
            CustomError::bad_request()
        })?;

        Ok(AuthorData {
            id,
            name: author.name,
            birthdate: birthdate.format(DATE_FORMAT).to_string(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), CustomError> {
        self.repository
            .delete(id)
            .await
            .map_err(|_| CustomError::not_found())?;

        Ok(())
    }
}

/// Map a stored row to the wire shape, formatting the date back out.
fn author_data(author: &AuthorRow) -> AuthorData {
    AuthorData {
        id: author.id,
        name: author.name.clone(),
        birthdate: author.birthdate.format(DATE_FORMAT).to_string(),
    }
}
