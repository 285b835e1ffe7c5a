//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, StoreError, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// Token validation failures, revocation conflicts, and store failures are
/// deliberately separate variants: the presentation layer collapses the first
/// two into one uniform 401 while store failures fail closed with a 500.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Session ledger unreachable or misbehaving; requests fail closed
    #[error("session store error: {0}")]
    Store(#[from] StoreError),

    /// Zero records deleted on logout/refresh: the session was already
    /// consumed or revoked by someone else
    #[error("session already consumed or revoked")]
    RevocationConflict,

    #[error("database error: {message}")]
    Database { message: String },

    #[error("resource not found: {resource}")]
    NotFound { resource: String },

    #[error("internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
