//! Signing-key and token-lifetime configuration

use serde::{Deserialize, Serialize};

/// Locations of the four PEM-encoded key files
///
/// Access and refresh tokens are signed with independent key pairs so the
/// verifying half of either family can be distributed on its own.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyConfig {
    /// Path to the access-token signing key (private)
    pub access_private_key_path: String,

    /// Path to the access-token verifying key (public)
    pub access_public_key_path: String,

    /// Path to the refresh-token signing key (private)
    pub refresh_private_key_path: String,

    /// Path to the refresh-token verifying key (public)
    pub refresh_public_key_path: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            access_private_key_path: String::from("core/keys/access_private_key.pem"),
            access_public_key_path: String::from("core/keys/access_public_key.pem"),
            refresh_private_key_path: String::from("core/keys/refresh_private_key.pem"),
            refresh_public_key_path: String::from("core/keys/refresh_public_key.pem"),
        }
    }
}

impl KeyConfig {
    /// Create from environment variables, falling back to the dev key paths
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_private_key_path: std::env::var("ACCESS_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.access_private_key_path),
            access_public_key_path: std::env::var("ACCESS_PUBLIC_KEY_PATH")
                .unwrap_or(defaults.access_public_key_path),
            refresh_private_key_path: std::env::var("REFRESH_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.refresh_private_key_path),
            refresh_public_key_path: std::env::var("REFRESH_PUBLIC_KEY_PATH")
                .unwrap_or(defaults.refresh_public_key_path),
        }
    }
}

/// Token lifetimes and signing algorithm
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Signing algorithm name; must belong to the RSA family (RS256/RS384/RS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
        }
    }
}

impl TokenConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let access_token_expiry = std::env::var("ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900);
        let refresh_token_expiry = std::env::var("REFRESH_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .unwrap_or(604800);

        Self {
            algorithm: std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| default_algorithm()),
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }
}

fn default_algorithm() -> String {
    String::from("RS256")
}
