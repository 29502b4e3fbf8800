//! Uniform success and error envelopes.
//!
//! Every endpoint answers with one of two shapes: a success envelope
//! `{status, status_code, message, data?}` or a serialized [`CustomError`]
//! `{status_code, message, errors?}`. Services produce `CustomError`
//! values directly; nothing below the transport layer ever leaks a raw
//! storage or signing error.

use serde::Serialize;

/// Additional detail attached to an error envelope.
///
/// Either a single free-form message or the ordered list of per-field
/// validation messages. Serialized untagged so the wire shape is a plain
/// string or a string array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorInfo {
    Message(String),
    Fields(Vec<String>),
}

impl From<String> for ErrorInfo {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for ErrorInfo {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<Vec<String>> for ErrorInfo {
    fn from(fields: Vec<String>) -> Self {
        Self::Fields(fields)
    }
}

/// Normalized error value passed between the validation, service, and
/// transport layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomError {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorInfo>,
}

impl CustomError {
    fn new(status_code: u16, message: &str, errors: Option<ErrorInfo>) -> Self {
        Self {
            status_code,
            message: message.to_string(),
            errors,
        }
    }

    /// Bad request (400).
    pub fn bad_request() -> Self {
        Self::new(400, "BAD REQUEST", None)
    }

    /// Bad request (400) with additional detail.
    pub fn bad_request_with_info(info: impl Into<ErrorInfo>) -> Self {
        Self::new(400, "BAD REQUEST", Some(info.into()))
    }

    /// Not found. Reported with a 400 status code; this is the system's
    /// convention, kept for wire compatibility.
    pub fn not_found() -> Self {
        Self::new(400, "NOT FOUND", None)
    }

    /// Unauthorized (401).
    pub fn unauthorized() -> Self {
        Self::new(401, "UNAUTHORIZED", None)
    }

    /// Unauthorized (401) with additional detail.
    pub fn unauthorized_with_info(info: impl Into<ErrorInfo>) -> Self {
        Self::new(401, "UNAUTHORIZED", Some(info.into()))
    }

    /// General server error (500).
    pub fn general() -> Self {
        Self::new(500, "GENERAL ERROR", None)
    }

    /// General server error (500) with additional detail.
    pub fn general_with_info(info: impl Into<ErrorInfo>) -> Self {
        Self::new(500, "GENERAL ERROR", Some(info.into()))
    }
}

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status_code)
    }
}

/// Success envelope with a typed payload.
///
/// `data` is generic per endpoint rather than a dynamically typed field,
/// so each response shape is checked at compile time. A payload-less
/// envelope is `SuccessResponse<()>` with `data: None`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    pub status: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl SuccessResponse<()> {
    /// 200 envelope with the stock message and no payload.
    pub fn general() -> Self {
        Self {
            status: true,
            status_code: 200,
            message: "SUCCESS".to_string(),
            data: None,
        }
    }

    /// 201 envelope with the stock message and no payload.
    pub fn created() -> Self {
        Self {
            status: true,
            status_code: 201,
            message: "CREATED SUCCESS".to_string(),
            data: None,
        }
    }

    /// 201 envelope with a custom message and no payload.
    pub fn created_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Self::created()
        }
    }
}

impl<T> SuccessResponse<T> {
    /// 200 envelope with a custom message and payload.
    pub fn general_with(message: &str, data: T) -> Self {
        Self {
            status: true,
            status_code: 200,
            message: message.to_string(),
            data: Some(data),
        }
    }

    /// 201 envelope with a custom message and payload.
    pub fn created_with(message: &str, data: T) -> Self {
        Self {
            status: true,
            status_code: 201,
            message: message.to_string(),
            data: Some(data),
        }
    }
}
