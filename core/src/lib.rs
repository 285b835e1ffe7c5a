//! # AuthGate Core
//!
//! Core domain layer for the AuthGate backend. This crate contains the token
//! lifecycle (issuance, validation, rotation, revocation), the session-ledger
//! and user-repository contracts, domain entities, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
