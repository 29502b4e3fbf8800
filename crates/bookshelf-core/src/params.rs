//! Request and response parameter types for every endpoint.
//!
//! Request types default missing JSON fields to their zero values so the
//! validation layer can report them all at once instead of the decoder
//! failing on the first absent field.

use serde::{Deserialize, Serialize};

use crate::response::CustomError;
use crate::validate::{Rules, Validate};

/// Date format used for author birthdates on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Author
// ============================================================================

/// Body for author create/update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorRequest {
    pub name: String,
    /// Calendar date in `YYYY-MM-DD` form; parsed by the author service.
    pub birthdate: String,
}

impl Validate for AuthorRequest {
    fn validate(&self) -> Result<(), CustomError> {
        let mut rules = Rules::new();
        rules.required_str("Name", &self.name);
        rules.required_str("Birthdate", &self.birthdate);
        rules.finish()
    }
}

/// Author payload in responses, standalone or nested in a book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorData {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub birthdate: String,
}

// ============================================================================
// Book
// ============================================================================

/// Body for book create/update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookRequest {
    pub title: String,
    pub isbn: String,
    pub author_id: i64,
}

impl Validate for BookRequest {
    fn validate(&self) -> Result<(), CustomError> {
        let mut rules = Rules::new();
        rules.required_str("Title", &self.title);
        rules.required_id("AuthorID", self.author_id);
        rules.finish()
    }
}

/// Book payload in responses, with the referenced author embedded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookData {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub author: AuthorData,
}

// ============================================================================
// User
// ============================================================================

/// Body for register and login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub username: String,
    pub password: String,
}

impl Validate for UserRequest {
    fn validate(&self) -> Result<(), CustomError> {
        let mut rules = Rules::new();
        rules.required_str("Username", &self.username);
        rules.bounded_str("Password", &self.password, 8, 72);
        rules.finish()
    }
}

/// Login response payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenData {
    pub token: String,
}
