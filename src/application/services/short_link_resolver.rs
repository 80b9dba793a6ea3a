//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{ResolvedShortLink, ShortLink};
use crate::domain::repositories::LinkRegistry;
use crate::error::AppError;
use crate::utils::code_generator::is_alphabet_code;

/// Message used when no code was supplied.
pub const MISSING_CODE_MESSAGE: &str = "Short code not provided";

/// Message used when a code is not registered.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Resolves short codes to their destination and counts the visit.
pub struct ShortLinkResolver {
    registry: Arc<dyn LinkRegistry>,
}

impl ShortLinkResolver {
    /// Creates a new resolver.
    pub fn new(registry: Arc<dyn LinkRegistry>) -> Self {
        Self { registry }
    }

    /// Looks up `code`, counts one click and returns the destination.
    ///
    /// The returned `click_count` is the value read before the increment;
    /// callers needing the fresh count should read the link again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` is blank.
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Storage`] on registry failures.
    pub async fn resolve(&self, code: &str) -> Result<ResolvedShortLink, AppError> {
        let link = self.lookup(code).await?;

        self.registry.increment_clicks(&link.short_code).await?;
        debug!(code = %link.short_code, "Short link resolved");

        Ok(ResolvedShortLink {
            short_code: link.short_code,
            original_url: link.original_url,
            click_count: link.click_count,
        })
    }

    /// Looks up `code` without counting a click.
    ///
    /// Codes containing symbols outside the generation alphabet can never
    /// have been issued and are reported as not found without a store round
    /// trip.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn lookup(&self, code: &str) -> Result<ShortLink, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::bad_request(MISSING_CODE_MESSAGE, json!({})));
        }

        if !is_alphabet_code(code) {
            return Err(not_found(code));
        }

        self.registry
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found(NOT_FOUND_MESSAGE, json!({ "code": code }))
}
