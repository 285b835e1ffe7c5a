//! External user-provisioning webhook configuration

use serde::{Deserialize, Serialize};

/// Configuration for the external "create user" webhook
///
/// When no URL is configured the webhook is disabled and registration
/// completes without the external call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Full endpoint URL that newly created users are POSTed to
    #[serde(default)]
    pub users_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            users_url: None,
            timeout: default_timeout(),
        }
    }
}

impl WebhookConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            users_url: std::env::var("USERS_WEBHOOK_URL").ok().filter(|s| !s.is_empty()),
            timeout: std::env::var("USERS_WEBHOOK_TIMEOUT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        }
    }

    /// Whether the webhook should be called at all
    pub fn is_enabled(&self) -> bool {
        self.users_url.is_some()
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_disabled_by_default() {
        let config = WebhookConfig::default();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_webhook_enabled_with_url() {
        let config = WebhookConfig {
            users_url: Some("http://users.internal/registrations".to_string()),
            timeout: 10,
        };
        assert!(config.is_enabled());
    }
}
