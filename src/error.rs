//! # Error Handling
//!
//! This module defines the application error type and converts it into HTTP
//! responses. Every error body has the same shape:
//!
//! ```json
//! { "msg": "error message here" }
//! ```
//!
//! Client-facing variants carry a message that is safe to show. Internal
//! variants (database, hashing, signing) are logged in full and answered
//! with a generic message so store or crypto details never leak.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for every internal failure
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Try again later.";

/// Application-wide error type
///
/// Each variant maps to one HTTP status code in [`IntoResponse`] below.
/// The `#[from]` variants let `?` convert library errors directly.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or mismatched fields, or bad credentials (422)
    #[error("{0}")]
    Validation(String),

    /// The email is already registered (422)
    #[error("{0}")]
    Conflict(String),

    /// No user matches the lookup key (404)
    #[error("{0}")]
    NotFound(String),

    /// No bearer token was presented (401)
    #[error("{0}")]
    Unauthorized(String),

    /// A bearer token was presented but does not verify
    ///
    /// Answered with 404, not 401. Clients of this API already rely on
    /// that distinction between a missing and a bad token.
    #[error("invalid token")]
    InvalidToken,

    /// The request body could not be read or parsed
    ///
    /// Carries the status axum chose for the rejection (400 for malformed
    /// JSON, 422 for a field of the wrong type, 413 for an oversized body).
    #[error("{msg}")]
    Rejected { status: StatusCode, msg: String },

    /// The request did not finish within the configured timeout (408)
    #[error("request timed out")]
    Timeout,

    /// Database errors (SQLx library errors)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing errors
    #[error("Hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing errors
    ///
    /// Verification failures never take this path; they become
    /// [`AppError::InvalidToken`].
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Any other unexpected failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) | AppError::InvalidToken => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Rejected { status, .. } => *status,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Database(_)
            | AppError::Hash(_)
            | AppError::Token(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            msg: rejection.body_text(),
        }
    }
}

/// Convert AppError into an HTTP response
///
/// 1. Pick the status code
/// 2. Log internal errors with their full detail (server side only)
/// 3. Replace internal detail with the generic message
/// 4. Return `{ "msg": ... }`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!("{}", self);
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "msg": message }))).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
