//! Business logic services for the application layer.

pub mod short_link_creator;
pub mod short_link_resolver;

pub use short_link_creator::ShortLinkCreator;
pub use short_link_resolver::ShortLinkResolver;
