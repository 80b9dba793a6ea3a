//! Infrastructure layer for external integrations.
//!
//! Implements the storage capability defined by the domain layer.
//!
//! - [`persistence`] - Link registry implementations

pub mod persistence;
