//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! - [`ShortLink`] - A persisted short code to URL mapping
//! - [`CreatedShortLink`] - Outcome of a creation request
//! - [`ResolvedShortLink`] - Outcome of resolving a code

pub mod short_link;

pub use short_link::{CreatedShortLink, ResolvedShortLink, ShortLink};
