//! In-process implementation of the link registry.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRegistry;
use crate::error::AppError;

/// Registry that keeps every link in memory.
///
/// Used by the `memory` storage backend and by tests. Contents are lost when
/// the process exits.
///
/// Links are keyed by code in a `DashMap`, so the code uniqueness check and
/// the insert happen under the same shard lock, and click increments are
/// applied in place under that lock. A second map indexes the first code
/// issued for each URL.
#[derive(Debug)]
pub struct InMemoryLinkRegistry {
    links: DashMap<String, ShortLink>,
    codes_by_url: DashMap<String, String>,
    next_id: AtomicI64,
}

impl InMemoryLinkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
            codes_by_url: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryLinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRegistry for InMemoryLinkRegistry {
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, AppError> {
        let Some(code) = self.codes_by_url.get(url).map(|c| c.value().clone()) else {
            return Ok(None);
        };

        Ok(self.links.get(&code).map(|l| l.value().clone()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(code).map(|l| l.value().clone()))
    }

    async fn insert(&self, code: &str, url: &str) -> Result<ShortLink, AppError> {
        let link = match self.links.entry(code.to_string()) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "code": code }),
                ));
            }
            Entry::Vacant(slot) => {
                let link = ShortLink::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    code.to_string(),
                    url.to_string(),
                    0,
                    Utc::now(),
                );
                slot.insert(link.clone());
                link
            }
        };

        self.codes_by_url
            .entry(url.to_string())
            .or_insert_with(|| code.to_string());

        Ok(link)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        if let Some(mut link) = self.links.get_mut(code) {
            link.click_count += 1;
        }

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let mut links: Vec<ShortLink> = self.links.iter().map(|l| l.value().clone()).collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        links.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
