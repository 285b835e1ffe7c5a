//! Issuance of signed access/refresh token pairs

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, Header};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;
use super::key_manager::KeyManager;

/// Builds and signs a fresh access+refresh token pair for a subject
///
/// Each issuance generates two independent v4 UUIDs; a UUID is never reused
/// across pairs. The issuer persists nothing - recording the session ledger
/// entries is the caller's responsibility.
pub struct TokenIssuer {
    keys: Arc<KeyManager>,
    config: TokenServiceConfig,
}

impl TokenIssuer {
    pub fn new(keys: Arc<KeyManager>, config: TokenServiceConfig) -> Self {
        Self { keys, config }
    }

    /// Issue a signed token pair for `subject_id` carrying `roles`
    pub fn issue(&self, subject_id: i64, roles: &[String]) -> Result<TokenPair, TokenError> {
        let now = Utc::now();
        let access_expires_at = now + self.config.access_token_expiry;
        let refresh_expires_at = now + self.config.refresh_token_expiry;

        let access_uuid = Uuid::new_v4().to_string();
        let refresh_uuid = Uuid::new_v4().to_string();

        let header = Header::new(self.config.algorithm);

        let access_claims = Claims::new(
            subject_id,
            roles.to_vec(),
            access_uuid.clone(),
            access_expires_at,
        );
        let access_token = encode(&header, &access_claims, self.keys.access_signing())
            .map_err(|e| TokenError::Signing {
                message: e.to_string(),
            })?;

        let refresh_claims = Claims::new(
            subject_id,
            roles.to_vec(),
            refresh_uuid.clone(),
            refresh_expires_at,
        );
        let refresh_token = encode(&header, &refresh_claims, self.keys.refresh_signing())
            .map_err(|e| TokenError::Signing {
                message: e.to_string(),
            })?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_uuid,
            refresh_uuid,
            access_expires_at,
            refresh_expires_at,
        })
    }
}
