//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - signing-key locations and token lifetimes
//! - `cache` - Redis session-ledger configuration
//! - `database` - database connection and pool configuration
//! - `server` - HTTP server configuration
//! - `webhook` - external user-provisioning webhook

pub mod auth;
pub mod cache;
pub mod database;
pub mod server;
pub mod webhook;

// Re-export commonly used types
pub use auth::{KeyConfig, TokenConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use webhook::WebhookConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Session-ledger (Redis) configuration
    pub cache: CacheConfig,

    /// Signing-key locations
    pub keys: KeyConfig,

    /// Token lifetimes and algorithm
    pub tokens: TokenConfig,

    /// User-provisioning webhook configuration
    pub webhook: WebhookConfig,
}

impl AppConfig {
    /// Load the whole configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            keys: KeyConfig::from_env(),
            tokens: TokenConfig::from_env(),
            webhook: WebhookConfig::from_env(),
        }
    }
}
