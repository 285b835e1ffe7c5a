//! Token validation: structure, algorithm, signature, expiry, claims

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Parses, verifies, and decodes a token against a supplied verifying key
///
/// Checks run in a fixed order. The declared algorithm is compared against
/// the configured one before any signature work: a token claiming a
/// different scheme must never reach verification, or an attacker could
/// present key material under a weaker algorithm it happens to validate with.
pub struct TokenValidator {
    algorithm: jsonwebtoken::Algorithm,
}

impl TokenValidator {
    pub fn new(algorithm: jsonwebtoken::Algorithm) -> Self {
        Self { algorithm }
    }

    /// Validate `token` against `key` and decode its claims
    ///
    /// Expiry is checked here rather than by the JWT library so the error can
    /// report how far past expiry the token is.
    pub fn validate(&self, token: &str, key: &DecodingKey) -> Result<Claims, TokenError> {
        if token.split('.').count() != 3 {
            return Err(TokenError::Malformed);
        }

        let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
        if header.alg != self.algorithm {
            return Err(TokenError::AlgorithmMismatch {
                expected: self.algorithm,
                found: header.alg,
            });
        }

        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;

        let data = decode::<Claims>(token, key, &validation).map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => TokenError::ClaimsDecode,
            _ => TokenError::Malformed,
        })?;

        let claims = data.claims;
        let now = Utc::now().timestamp();
        if now >= claims.exp {
            return Err(TokenError::Expired {
                expired_by: Duration::seconds(now - claims.exp),
            });
        }

        Ok(claims)
    }
}
