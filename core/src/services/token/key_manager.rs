//! Key management for the access and refresh signing families

use std::fs;
use std::path::Path;

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::TokenError;

/// Holder of the four RSA keys used for JWT operations
///
/// Access and refresh tokens are signed by independent key pairs. Loaded once
/// at startup and never mutated; a missing or unparsable key file is fatal.
#[derive(Clone)]
pub struct KeyManager {
    access_signing: EncodingKey,
    access_verifying: DecodingKey,
    refresh_signing: EncodingKey,
    refresh_verifying: DecodingKey,
}

impl std::fmt::Debug for KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyManager").finish_non_exhaustive()
    }
}

impl KeyManager {
    /// Load all four keys from the configured PEM file locations
    pub fn from_files(config: &ag_shared::KeyConfig) -> Result<Self, TokenError> {
        Ok(Self {
            access_signing: load_signing_key(&config.access_private_key_path)?,
            access_verifying: load_verifying_key(&config.access_public_key_path)?,
            refresh_signing: load_signing_key(&config.refresh_private_key_path)?,
            refresh_verifying: load_verifying_key(&config.refresh_public_key_path)?,
        })
    }

    /// Build from in-memory PEM strings (tests, embedded keys)
    pub fn from_pem_strings(
        access_private: &str,
        access_public: &str,
        refresh_private: &str,
        refresh_public: &str,
    ) -> Result<Self, TokenError> {
        Ok(Self {
            access_signing: parse_signing_key(access_private.as_bytes(), "access signing key")?,
            access_verifying: parse_verifying_key(
                access_public.as_bytes(),
                "access verifying key",
            )?,
            refresh_signing: parse_signing_key(refresh_private.as_bytes(), "refresh signing key")?,
            refresh_verifying: parse_verifying_key(
                refresh_public.as_bytes(),
                "refresh verifying key",
            )?,
        })
    }

    /// Private key signing access tokens
    pub fn access_signing(&self) -> &EncodingKey {
        &self.access_signing
    }

    /// Public key verifying access tokens
    pub fn access_verifying(&self) -> &DecodingKey {
        &self.access_verifying
    }

    /// Private key signing refresh tokens
    pub fn refresh_signing(&self) -> &EncodingKey {
        &self.refresh_signing
    }

    /// Public key verifying refresh tokens
    pub fn refresh_verifying(&self) -> &DecodingKey {
        &self.refresh_verifying
    }
}

fn load_signing_key(path: impl AsRef<Path>) -> Result<EncodingKey, TokenError> {
    let path = path.as_ref();
    let pem = fs::read(path).map_err(|e| TokenError::KeyLoad {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    parse_signing_key(&pem, &path.display().to_string())
}

fn load_verifying_key(path: impl AsRef<Path>) -> Result<DecodingKey, TokenError> {
    let path = path.as_ref();
    let pem = fs::read(path).map_err(|e| TokenError::KeyLoad {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    parse_verifying_key(&pem, &path.display().to_string())
}

fn parse_signing_key(pem: &[u8], source: &str) -> Result<EncodingKey, TokenError> {
    EncodingKey::from_rsa_pem(pem).map_err(|e| TokenError::KeyLoad {
        message: format!("{} is not a valid RSA private key: {}", source, e),
    })
}

fn parse_verifying_key(pem: &[u8], source: &str) -> Result<DecodingKey, TokenError> {
    DecodingKey::from_rsa_pem(pem).map_err(|e| TokenError::KeyLoad {
        message: format!("{} is not a valid RSA public key: {}", source, e),
    })
}
