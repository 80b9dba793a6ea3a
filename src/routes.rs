//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `POST /create-short-url`            - Create short link (CORS, rate limited)
//! - `GET  /redirect-short-url/{code}`   - 302 redirect
//! - `GET  /s/{code}`                    - Confirmation page
//! - `GET  /health`                      - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on link creation
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::RateLimit;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP budget for link creation; `None` disables limiting
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
///
/// Without a proxy the limiter keys on the peer address, so the router must
/// be served with `into_make_service_with_connect_info::<SocketAddr>`.
pub fn app_router(
    state: AppState,
    rate_limit: Option<RateLimit>,
    behind_proxy: bool,
) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::create_routes(rate_limit, behind_proxy))
        .merge(api::routes::redirect_routes())
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
