//! Data Transfer Objects for API requests and responses.

pub mod create_short_link;
pub mod health;
