//! # Infrastructure Layer
//!
//! Concrete implementations of the core's persistence contracts and external
//! collaborators:
//! - **Database**: Postgres implementations using SQLx
//! - **Cache**: Redis client backing the session ledger
//! - **Webhook**: HTTP client notifying the external user service

/// Database module - Postgres implementations using SQLx
pub mod database;

/// Cache module - Redis client and the session ledger implementation
pub mod cache;

/// Webhook module - external user-provisioning notification
pub mod webhook;

pub use cache::{RedisClient, RedisSessionStore};
pub use database::{DatabasePool, PgUserRepository};
pub use webhook::{UserWebhook, WebhookError};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Database migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
