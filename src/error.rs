//! Application error type and its HTTP mapping.
//!
//! Every failure in the service is expressed as an [`AppError`]. Handlers
//! return it directly and axum turns it into a JSON response through the
//! [`IntoResponse`] implementation below.
//!
//! # Status mapping
//!
//! | Variant            | Status | Body                                      |
//! |--------------------|--------|-------------------------------------------|
//! | `Validation`       | 400    | the validation message                    |
//! | `NotFound`         | 404    | the not-found message                     |
//! | `Conflict`         | 500    | `Failed to create short URL`              |
//! | `ExhaustedRetries` | 500    | `Failed to generate unique short code`    |
//! | `Storage`          | 500    | `Internal Server Error`                   |
//!
//! Server-side failures are logged with their full details; the response
//! body never carries more than the generic message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Message returned for any create request whose URL cannot be accepted.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL provided";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("Failed to generate unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } | Self::ExhaustedRetries { .. } | Self::Storage { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to the client.
    ///
    /// Client errors expose their own message; server errors collapse to a
    /// fixed string so no storage detail leaks out.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message, .. } | Self::NotFound { message, .. } => message.clone(),
            Self::Conflict { .. } => "Failed to create short URL".to_string(),
            Self::ExhaustedRetries { .. } => "Failed to generate unique short code".to_string(),
            Self::Storage { .. } => "Internal Server Error".to_string(),
        }
    }

    /// Structured details, logged for server errors.
    pub fn details(&self) -> Value {
        match self {
            Self::Validation { details, .. }
            | Self::NotFound { details, .. }
            | Self::Conflict { details, .. }
            | Self::Storage { details, .. } => details.clone(),
            Self::ExhaustedRetries { attempts } => json!({ "attempts": attempts }),
        }
    }

    /// Logs server-side failures with full detail.
    pub fn log(&self) {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, details = %self.details(), "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let message = self.public_message();

        (status, Json(ErrorBody { error: &message })).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request(INVALID_URL_MESSAGE, json!({ "fields": errors.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            INVALID_URL_MESSAGE,
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Maps a database error onto the application taxonomy.
///
/// Unique violations become [`AppError::Conflict`]; everything else is a
/// [`AppError::Storage`] failure.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    AppError::storage("Database error", json!({ "reason": e.to_string() }))
}
