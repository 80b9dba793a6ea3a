//! ShortLink entity representing a short code to URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short link.
///
/// The `short_code` and `original_url` never change after creation. The only
/// mutable field is `click_count`, which is advanced by the store on every
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortLink {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            click_count,
            created_at,
        }
    }
}

/// Result of a creation request.
///
/// `existing` is true when the URL had already been shortened and the stored
/// code was handed back instead of minting a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedShortLink {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
    pub existing: bool,
    pub created_at: DateTime<Utc>,
}

/// Result of resolving a short code.
///
/// `click_count` is the value read before this resolution was counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShortLink {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
}
