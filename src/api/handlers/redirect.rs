//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::application::services::short_link_resolver::MISSING_CODE_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /redirect-short-url/{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the registry
/// 2. Count the click (atomic increment in the store)
/// 3. Return 302 Found with `Location` set to the original URL
///
/// # Errors
///
/// Failures are rendered as plain text: 404 for unknown codes, 500 for
/// storage failures.
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    let resolved = match state.resolver.resolve(&code).await {
        Ok(resolved) => resolved,
        Err(err) => return plain_error(err),
    };

    match location_header(&resolved.original_url) {
        Some(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        None => plain_error(AppError::storage(
            "Stored URL cannot be used as a Location header",
            serde_json::json!({ "code": resolved.short_code }),
        )),
    }
}

/// Handles `GET /redirect-short-url` without a code.
pub async fn missing_code_handler() -> Response {
    (StatusCode::BAD_REQUEST, MISSING_CODE_MESSAGE).into_response()
}

/// Builds the `Location` value for a stored URL.
///
/// ASCII URLs are used verbatim. Anything else (IDN hosts, non-ASCII paths)
/// is sent in its parsed, percent-encoded form.
fn location_header(original_url: &str) -> Option<HeaderValue> {
    if original_url.is_ascii() {
        return HeaderValue::from_str(original_url).ok();
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
}

fn plain_error(err: AppError) -> Response {
    err.log();
    (err.status_code(), err.public_message()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_verbatim() {
        let value = location_header("https://example.com").unwrap();
        assert_eq!(value, "https://example.com");
    }

    #[test]
    fn test_location_header_encodes_non_ascii() {
        let value = location_header("https://example.com/päth").unwrap();
        assert_eq!(value, "https://example.com/p%C3%A4th");
    }

    #[test]
    fn test_location_header_encodes_idn_host() {
        let value = location_header("https://bücher.example/").unwrap();
        assert_eq!(value, "https://xn--bcher-kva.example/");
    }

    #[test]
    fn test_location_header_rejects_control_characters() {
        assert!(location_header("https://example.com/\r\nSet-Cookie: a=b").is_none());
    }
}
