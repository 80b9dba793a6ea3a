//! Confirmation page shown before following a short link.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::application::services::short_link_resolver::MISSING_CODE_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the confirmation page.
///
/// Renders `templates/short_link.html` with the destination, the visit count
/// and an automatic forward after `delay_seconds`.
#[derive(Template, WebTemplate)]
#[template(path = "short_link.html")]
pub struct ShortLinkTemplate {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub delay_seconds: u64,
    /// Only web URLs get a clickable link and an automatic forward.
    pub navigable: bool,
}

/// Template for the error state of the confirmation page.
#[derive(Template, WebTemplate)]
#[template(path = "short_link_error.html")]
pub struct ShortLinkErrorTemplate {
    pub message: String,
}

/// Resolves a code and renders the confirmation page.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// The click is counted when the page is rendered, exactly as for the direct
/// redirect endpoint.
///
/// # Errors
///
/// Unknown codes render the error page with status 404; storage failures
/// render it with status 500.
pub async fn short_link_page_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.resolver.resolve(&code).await {
        Ok(resolved) => ShortLinkTemplate {
            navigable: is_web_url(&resolved.original_url),
            short_code: resolved.short_code,
            original_url: resolved.original_url,
            click_count: resolved.click_count,
            delay_seconds: state.redirect_delay_seconds,
        }
        .into_response(),
        Err(err) => error_page(err),
    }
}

/// Renders the error page for `GET /s` without a code.
pub async fn missing_code_page_handler() -> Response {
    error_page(AppError::bad_request(
        MISSING_CODE_MESSAGE,
        serde_json::json!({}),
    ))
}

fn error_page(err: AppError) -> Response {
    err.log();
    (
        err.status_code(),
        ShortLinkErrorTemplate {
            message: err.public_message(),
        },
    )
        .into_response()
}

fn is_web_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("https://example.com"));
        assert!(is_web_url("http://example.com/a?b=c"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_template_escapes_destination() {
        let page = ShortLinkTemplate {
            short_code: "aB3dE9".to_string(),
            original_url: "https://example.com/?a=<b>".to_string(),
            click_count: 7,
            delay_seconds: 2,
            navigable: true,
        }
        .render()
        .unwrap();

        assert!(page.contains("?a=&#60;b&#62;"));
        assert!(!page.contains("<b>"));
        assert!(page.contains("7"));
    }

    #[test]
    fn test_template_without_navigation() {
        let page = ShortLinkTemplate {
            short_code: "aB3dE9".to_string(),
            original_url: "mailto:someone@example.com".to_string(),
            click_count: 0,
            delay_seconds: 2,
            navigable: false,
        }
        .render()
        .unwrap();

        assert!(!page.contains("http-equiv=\"refresh\""));
        assert!(page.contains("mailto:someone@example.com"));
    }
}
