//! External user-provisioning webhook client.

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

use ag_core::domain::entities::user::User;
use ag_shared::WebhookConfig;

/// Failure modes of the user-provisioning call
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The collaborator rejected the user; its error body is passed through
    #[error("user rejected by external service")]
    Rejected { errors: Value },

    /// The collaborator was unreachable or answered with an unexpected status
    #[error("external user service unavailable: {message}")]
    Unavailable { message: String },
}

/// Client POSTing newly created users to the external user service
pub struct UserWebhook {
    client: reqwest::Client,
    config: WebhookConfig,
}

impl UserWebhook {
    pub fn new(config: WebhookConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    /// Notify the external service of a created user
    ///
    /// No-op when no endpoint is configured. The user's serialized form
    /// excludes the password hash.
    pub async fn notify_created(&self, user: &User) -> Result<(), WebhookError> {
        let Some(url) = &self.config.users_url else {
            return Ok(());
        };

        let response = self
            .client
            .post(url)
            .json(user)
            .send()
            .await
            .map_err(|e| {
                error!("user webhook unreachable: {}", e);
                WebhookError::Unavailable {
                    message: e.to_string(),
                }
            })?;

        match response.status() {
            StatusCode::OK => {
                info!(user_id = user.id, "user webhook notified");
                Ok(())
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let errors = response
                    .json::<Value>()
                    .await
                    .unwrap_or(Value::String("rejected".to_string()));
                Err(WebhookError::Rejected { errors })
            }
            other => Err(WebhookError::Unavailable {
                message: format!("unexpected status {}", other),
            }),
        }
    }
}
