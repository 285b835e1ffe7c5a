//! Token entities for JWT-based session authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for the JWT payload
///
/// Self-contained: no token-library base type is embedded, so the wire field
/// names below are the single source of truth for the payload format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub user_id: i64,

    /// Role names carried for downstream services
    pub roles: Vec<String>,

    /// Session UUID mirrored in the session ledger
    pub uuid: String,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for one token of a pair
    pub fn new(user_id: i64, roles: Vec<String>, uuid: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            roles,
            uuid,
            exp: expires_at.timestamp(),
        }
    }

    /// Expiration as a `DateTime`
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// How far past expiry the claims are; zero when still valid
    pub fn expired_by(&self) -> Duration {
        let overshoot = Utc::now().timestamp() - self.exp;
        if overshoot > 0 {
            Duration::seconds(overshoot)
        } else {
            Duration::zero()
        }
    }
}

/// Signed token pair returned to the client
///
/// Only the two token strings are serialized; the UUIDs and expiries are
/// internal bookkeeping used to persist the session records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Session UUID embedded in the access token
    #[serde(skip_serializing)]
    pub access_uuid: String,

    /// Session UUID embedded in the refresh token
    #[serde(skip_serializing)]
    pub refresh_uuid: String,

    /// Access token expiry
    #[serde(skip_serializing)]
    pub access_expires_at: DateTime<Utc>,

    /// Refresh token expiry
    #[serde(skip_serializing)]
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenPair {
    /// Remaining access-token lifetime at this moment; zero if already past
    pub fn access_ttl(&self) -> std::time::Duration {
        (self.access_expires_at - Utc::now())
            .to_std()
            .unwrap_or_default()
    }

    /// Remaining refresh-token lifetime at this moment; zero if already past
    pub fn refresh_ttl(&self) -> std::time::Duration {
        (self.refresh_expires_at - Utc::now())
            .to_std()
            .unwrap_or_default()
    }
}
