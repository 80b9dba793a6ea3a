//! Short link creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{CreatedShortLink, ShortLink};
use crate::domain::repositories::LinkRegistry;
use crate::error::{AppError, INVALID_URL_MESSAGE};
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_url;

/// Default bound on code generation attempts per request.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Issues short codes for URLs.
///
/// Creation is idempotent on the exact URL string: a URL that already has a
/// code gets that code back. New codes are drawn from the injected
/// [`CodeGenerator`] and checked against the registry, with a bounded number
/// of attempts.
pub struct ShortLinkCreator {
    registry: Arc<dyn LinkRegistry>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
    max_attempts: usize,
}

impl ShortLinkCreator {
    /// Creates a new creator.
    ///
    /// `base_url` is the public origin short URLs are built on; a trailing
    /// slash is ignored.
    pub fn new(
        registry: Arc<dyn LinkRegistry>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            generator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the generation attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the short link for `original_url`, creating it if needed.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (no storage access on failure)
    /// 2. Return the existing mapping if the exact URL is already stored
    /// 3. Draw candidate codes until one is free, up to `max_attempts`
    /// 4. Insert; a lost race on the code counts as a collision and draws again
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not absolute.
    /// Returns [`AppError::ExhaustedRetries`] if every attempt collided.
    /// Returns [`AppError::Storage`] on registry failures.
    pub async fn create(&self, original_url: &str) -> Result<CreatedShortLink, AppError> {
        validate_url(original_url).map_err(|e| {
            AppError::bad_request(INVALID_URL_MESSAGE, json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.registry.find_by_url(original_url).await? {
            debug!(code = %existing.short_code, "Returning existing short link");
            return Ok(self.created(existing, true));
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if self.registry.find_by_code(&code).await?.is_some() {
                warn!(%code, attempt, "Short code collision, regenerating");
                continue;
            }

            match self.registry.insert(&code, original_url).await {
                Ok(link) => {
                    info!(code = %link.short_code, attempt, "Short link created");
                    return Ok(self.created(link, false));
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(%code, attempt, "Short code taken concurrently, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            attempts = self.max_attempts,
            "Failed to generate unique short code"
        );
        Err(AppError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    /// Registry links are issued into.
    pub fn registry(&self) -> Arc<dyn LinkRegistry> {
        self.registry.clone()
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/s/{}", self.base_url, code)
    }

    fn created(&self, link: ShortLink, existing: bool) -> CreatedShortLink {
        CreatedShortLink {
            short_url: self.short_url(&link.short_code),
            short_code: link.short_code,
            original_url: link.original_url,
            existing,
            created_at: link.created_at,
        }
    }
}
