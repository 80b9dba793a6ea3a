//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Storage reachable
/// - **503 Service Unavailable**: Storage ping failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "Connected, 42 links" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let healthy = storage.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { storage },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the registry and reports how many links it holds.
async fn check_storage(state: &AppState) -> CheckStatus {
    if let Err(e) = state.registry.ping().await {
        tracing::warn!(error = %e, details = %e.details(), "Storage health check failed");
        return CheckStatus {
            status: "error".to_string(),
            message: Some("Storage unreachable".to_string()),
        };
    }

    let message = match state.registry.count().await {
        Ok(count) => format!("Connected, {} links", count),
        Err(_) => "Connected".to_string(),
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ShortLinkCreator;
    use crate::domain::repositories::MockLinkRegistry;
    use crate::error::AppError;
    use crate::utils::code_generator::RandomCodeGenerator;
    use serde_json::json;
    use std::sync::Arc;

    fn state(registry: MockLinkRegistry) -> AppState {
        AppState::new(ShortLinkCreator::new(
            Arc::new(registry),
            Arc::new(RandomCodeGenerator::default()),
            "https://links.example.com",
        ))
    }

    #[tokio::test]
    async fn test_health_degraded_when_ping_fails() {
        let mut registry = MockLinkRegistry::new();
        registry
            .expect_ping()
            .returning(|| Err(AppError::storage("connection refused", json!({}))));
        registry.expect_count().never();

        let result = health_handler(State(state(registry))).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.checks.storage.status, "error");
        assert_eq!(
            body.checks.storage.message.as_deref(),
            Some("Storage unreachable")
        );
    }

    #[tokio::test]
    async fn test_health_ok_when_count_fails() {
        let mut registry = MockLinkRegistry::new();
        registry.expect_ping().returning(|| Ok(()));
        registry
            .expect_count()
            .returning(|| Err(AppError::storage("timeout", json!({}))));

        let Json(body) = health_handler(State(state(registry))).await.unwrap();

        assert_eq!(body.status, "healthy");
        assert_eq!(body.checks.storage.message.as_deref(), Some("Connected"));
    }
}
