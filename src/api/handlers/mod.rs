//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod create_short_link;
pub mod health;
pub mod redirect;

pub use create_short_link::{
    create_short_link_handler, method_not_allowed_handler, preflight_handler,
};
pub use health::health_handler;
pub use redirect::{missing_code_handler, redirect_handler};
