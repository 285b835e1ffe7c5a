//! Password hashing, a thin wrapper around bcrypt.

use crate::errors::{DomainError, DomainResult};

/// bcrypt work factor used for new hashes
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
pub fn hash(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, HASH_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Check a plaintext password against a stored hash
///
/// An unparsable stored hash counts as a mismatch.
pub fn verify(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
