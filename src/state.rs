//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ShortLinkCreator, ShortLinkResolver};
use crate::domain::repositories::LinkRegistry;

/// Default pause before the confirmation page forwards the visitor.
pub const DEFAULT_REDIRECT_DELAY_SECONDS: u64 = 2;

/// Services and settings shared by every request.
///
/// Holds no per-request mutable state; everything mutable lives behind the
/// [`LinkRegistry`].
#[derive(Clone)]
pub struct AppState {
    pub creator: Arc<ShortLinkCreator>,
    pub resolver: Arc<ShortLinkResolver>,
    pub registry: Arc<dyn LinkRegistry>,
    pub redirect_delay_seconds: u64,
}

impl AppState {
    /// Builds the state around a configured creator.
    ///
    /// The resolver and the health check use the creator's own registry.
    pub fn new(creator: ShortLinkCreator) -> Self {
        let registry = creator.registry();

        Self {
            creator: Arc::new(creator),
            resolver: Arc::new(ShortLinkResolver::new(registry.clone())),
            registry,
            redirect_delay_seconds: DEFAULT_REDIRECT_DELAY_SECONDS,
        }
    }

    /// Overrides the confirmation page delay.
    pub fn with_redirect_delay(mut self, seconds: u64) -> Self {
        self.redirect_delay_seconds = seconds;
        self
    }
}
