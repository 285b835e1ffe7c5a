//! Shared utilities and common types for the AuthGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Wire-format response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, KeyConfig, ServerConfig, TokenConfig, WebhookConfig,
};
pub use types::response::ErrorBody;
