//! Error type definitions for token and authentication operations
//!
//! Every failure is a tagged kind carrying its structured context; callers
//! match on the kind, never on message text. User-facing wording lives in the
//! presentation layer.

use chrono::Duration;
use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Token-related errors
///
/// `KeyLoad` and `UnsupportedAlgorithm` are fatal startup conditions; the
/// process must not serve traffic without usable key material. `Signing` is
/// an issuance failure (500). The remaining kinds are validation failures and
/// are all surfaced to clients as the same 401 so that token internals cannot
/// be probed through response differences.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Key material missing or unparsable at startup
    #[error("key material unusable: {message}")]
    KeyLoad { message: String },

    /// Configured algorithm is unknown or outside the RSA family
    #[error("unsupported signing algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// Signing failed while building a token pair
    #[error("token signing failed: {message}")]
    Signing { message: String },

    /// Token does not have the compact three-segment structure
    #[error("malformed token")]
    Malformed,

    /// Header declares a different algorithm than the configured one
    #[error("algorithm mismatch: expected {expected:?}, found {found:?}")]
    AlgorithmMismatch {
        expected: Algorithm,
        found: Algorithm,
    },

    /// Signature does not verify against the supplied key
    #[error("invalid token signature")]
    SignatureInvalid,

    /// `exp` is in the past; carries how far past expiry the token is
    #[error("token expired {}s ago", .expired_by.num_seconds())]
    Expired { expired_by: Duration },

    /// Payload fields could not be decoded into claims
    #[error("token claims could not be decoded")]
    ClaimsDecode,
}

impl TokenError {
    /// Whether this kind is a validation failure (as opposed to a startup or
    /// issuance failure). Validation failures map to 401, the rest to 500.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            TokenError::Malformed
                | TokenError::AlgorithmMismatch { .. }
                | TokenError::SignatureInvalid
                | TokenError::Expired { .. }
                | TokenError::ClaimsDecode
        )
    }
}

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password; indistinguishable on the wire
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account
    #[error("email already taken")]
    EmailTaken,

    #[error("user not found")]
    UserNotFound,
}

/// Session ledger failure
///
/// Wraps whatever the backing store reported; the ledger being unreachable is
/// never treated as "session absent".
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_error_reports_overshoot() {
        let err = TokenError::Expired {
            expired_by: Duration::seconds(90),
        };
        assert_eq!(err.to_string(), "token expired 90s ago");
    }

    #[test]
    fn test_validation_failure_classification() {
        assert!(TokenError::Malformed.is_validation_failure());
        assert!(TokenError::SignatureInvalid.is_validation_failure());
        assert!(TokenError::Expired {
            expired_by: Duration::seconds(1)
        }
        .is_validation_failure());
        assert!(!TokenError::Signing {
            message: "broken key".into()
        }
        .is_validation_failure());
        assert!(!TokenError::KeyLoad {
            message: "missing".into()
        }
        .is_validation_failure());
    }

    #[test]
    fn test_algorithm_mismatch_context() {
        let err = TokenError::AlgorithmMismatch {
            expected: Algorithm::RS256,
            found: Algorithm::HS256,
        };
        let text = err.to_string();
        assert!(text.contains("RS256"));
        assert!(text.contains("HS256"));
    }
}
