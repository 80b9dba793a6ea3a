//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{missing_code_page_handler, short_link_page_handler};
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /s/{code}` - Confirmation page that forwards to the destination
/// - `GET /s`        - Error page, no code given
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/s", get(missing_code_page_handler))
        .route("/s/{code}", get(short_link_page_handler))
}
