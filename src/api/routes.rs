//! API route configuration.

use crate::api::handlers::{
    create_short_link_handler, method_not_allowed_handler, missing_code_handler,
    preflight_handler, redirect_handler,
};
use crate::api::middleware::cors;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link creation route, wrapped in the permissive CORS policy.
///
/// # Endpoints
///
/// - `POST    /create-short-url` - Create or fetch a short link
/// - `OPTIONS /create-short-url` - CORS preflight
///
/// Any other method answers `405` with a JSON error body.
///
/// Only `POST` is rate limited. CORS wraps the limiter, so throttled
/// responses still carry `Access-Control-Allow-Origin` and preflights never
/// reach the limiter.
pub fn create_routes(rate_limit: Option<RateLimit>, behind_proxy: bool) -> Router<AppState> {
    let create = post(create_short_link_handler);
    let create = match rate_limit {
        Some(limit) if behind_proxy => create.route_layer(rate_limit::proxy_layer(limit)),
        Some(limit) => create.route_layer(rate_limit::layer(limit)),
        None => create,
    };

    Router::new()
        .route(
            "/create-short-url",
            create
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .layer(cors::layer())
}

/// Redirect routes.
///
/// # Endpoints
///
/// - `GET /redirect-short-url/{code}` - 302 to the original URL
/// - `GET /redirect-short-url`        - 400, no code given
pub fn redirect_routes() -> Router<AppState> {
    Router::new()
        .route("/redirect-short-url", get(missing_code_handler))
        .route("/redirect-short-url/{code}", get(redirect_handler))
}
