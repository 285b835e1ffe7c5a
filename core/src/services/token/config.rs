//! Configuration for the token services

use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};
use crate::errors::TokenError;

/// Configuration shared by the token issuer and validator
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing algorithm; restricted to the RSA family
    pub algorithm: Algorithm,
    /// Access token lifetime
    pub access_token_expiry: Duration,
    /// Refresh token lifetime
    pub refresh_token_expiry: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::RS256,
            access_token_expiry: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            refresh_token_expiry: Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }
}

impl TokenServiceConfig {
    /// Build from the environment-level configuration
    ///
    /// The algorithm name must belong to the RSA family; shared-secret
    /// schemes are rejected here so a misconfigured deployment fails at
    /// startup instead of weakening verification.
    pub fn from_shared(config: &ag_shared::TokenConfig) -> Result<Self, TokenError> {
        let algorithm = parse_rsa_algorithm(&config.algorithm)?;
        Ok(Self {
            algorithm,
            access_token_expiry: Duration::seconds(config.access_token_expiry),
            refresh_token_expiry: Duration::seconds(config.refresh_token_expiry),
        })
    }
}

fn parse_rsa_algorithm(name: &str) -> Result<Algorithm, TokenError> {
    match name {
        "RS256" => Ok(Algorithm::RS256),
        "RS384" => Ok(Algorithm::RS384),
        "RS512" => Ok(Algorithm::RS512),
        other => Err(TokenError::UnsupportedAlgorithm {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.algorithm, Algorithm::RS256);
        assert_eq!(config.access_token_expiry, Duration::minutes(15));
        assert_eq!(config.refresh_token_expiry, Duration::days(7));
        assert!(config.access_token_expiry < config.refresh_token_expiry);
    }

    #[test]
    fn test_rsa_family_accepted() {
        for name in ["RS256", "RS384", "RS512"] {
            assert!(parse_rsa_algorithm(name).is_ok(), "{} rejected", name);
        }
    }

    #[test]
    fn test_non_rsa_algorithms_rejected() {
        for name in ["HS256", "ES256", "none", ""] {
            let err = parse_rsa_algorithm(name).unwrap_err();
            assert!(matches!(err, TokenError::UnsupportedAlgorithm { .. }));
        }
    }

    #[test]
    fn test_from_shared_config() {
        let shared = ag_shared::TokenConfig {
            algorithm: "RS384".to_string(),
            access_token_expiry: 600,
            refresh_token_expiry: 86400,
        };

        let config = TokenServiceConfig::from_shared(&shared).unwrap();
        assert_eq!(config.algorithm, Algorithm::RS384);
        assert_eq!(config.access_token_expiry, Duration::seconds(600));
        assert_eq!(config.refresh_token_expiry, Duration::seconds(86400));
    }
}
