//! Link registry implementations.
//!
//! - [`PgLinkRegistry`] - PostgreSQL storage via SQLx
//! - [`InMemoryLinkRegistry`] - In-process storage for development and tests

pub mod memory_link_registry;
pub mod pg_link_registry;

pub use memory_link_registry::InMemoryLinkRegistry;
pub use pg_link_registry::PgLinkRegistry;
