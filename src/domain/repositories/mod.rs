//! Storage capability definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod link_registry;

pub use link_registry::LinkRegistry;

#[cfg(test)]
pub use link_registry::MockLinkRegistry;
