//! Storage capability for short links.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from short code to original URL.
///
/// Services receive the registry as an injected `Arc<dyn LinkRegistry>`, so
/// any implementation can stand behind the HTTP layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRegistry`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRegistry`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRegistry: Send + Sync {
    /// Finds a link by exact match on its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by exact match on its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Persists a new mapping with a zero click count.
    ///
    /// The store itself enforces code uniqueness, so two concurrent inserts
    /// of the same code cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `code` is already taken.
    /// Returns [`AppError::Storage`] on backend errors.
    async fn insert(&self, code: &str, url: &str) -> Result<ShortLink, AppError>;

    /// Atomically adds one to the click counter of `code`.
    ///
    /// Unknown codes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Lists the most recently created links, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Counts all stored links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Performs a cheap round trip to check the backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
