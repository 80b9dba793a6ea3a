//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRegistry`]
//! capability and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::ShortLinkCreator`] - Idempotent short code issuance
//! - [`services::ShortLinkResolver`] - Code lookup and click counting

pub mod services;
