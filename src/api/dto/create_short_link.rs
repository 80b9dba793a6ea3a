//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::CreatedShortLink;

/// Request to shorten a URL.
///
/// The field is optional at the serde level so a missing URL is reported as
/// a validation failure rather than a body parsing failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortLinkRequest {
    #[validate(length(min = 1, max = 2048, message = "Invalid URL provided"))]
    pub original_url: Option<String>,
}

/// Successful creation response.
///
/// `created_at` is only reported when a new code was minted.
#[derive(Debug, Serialize)]
pub struct CreateShortLinkResponse {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
    pub existing: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreatedShortLink> for CreateShortLinkResponse {
    fn from(created: CreatedShortLink) -> Self {
        Self {
            created_at: (!created.existing).then_some(created.created_at),
            short_url: created.short_url,
            short_code: created.short_code,
            original_url: created.original_url,
            existing: created.existing,
        }
    }
}
