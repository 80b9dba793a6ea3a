//! HTML page handlers.

pub mod short_link;

pub use short_link::{missing_code_page_handler, short_link_page_handler};
