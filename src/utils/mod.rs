//! Helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - URL acceptance rules
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
