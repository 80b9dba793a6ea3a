//! Handlers for the link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create_short_link::{CreateShortLinkRequest, CreateShortLinkResponse};
use crate::error::{AppError, INVALID_URL_MESSAGE};
use crate::state::AppState;

/// Creates (or returns the existing) short link for a URL.
///
/// # Endpoint
///
/// `POST /create-short-url`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "https://links.example.com/s/aB3dE9",
///   "short_code": "aB3dE9",
///   "original_url": "https://example.com/path",
///   "existing": false,
///   "created_at": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "Invalid URL provided"}` for a missing, malformed or
///   unparsable body or URL
/// - 500 when no free code was found or storage failed
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortLinkRequest>, JsonRejection>,
) -> Result<Json<CreateShortLinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url = payload.original_url.ok_or_else(|| {
        AppError::bad_request(
            INVALID_URL_MESSAGE,
            json!({ "reason": "original_url is missing" }),
        )
    })?;

    let created = state.creator.create(&original_url).await?;

    Ok(Json(created.into()))
}

/// Answers CORS preflight requests.
///
/// Real preflights are short-circuited by the CORS layer; this handler covers
/// bare `OPTIONS` requests so they are not reported as 405.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Rejects every method other than `POST` and `OPTIONS`.
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
}
