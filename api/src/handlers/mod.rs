//! Shared handler utilities: domain-error mapping and response helpers.

pub mod error;

pub use error::{handle_domain_error, invalid_token, validation_failure};
