//! Redis-backed session ledger.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use ag_core::errors::StoreError;
use ag_core::repositories::SessionStore;
use ag_shared::CacheConfig;

use super::redis_client::RedisClient;

/// Session ledger implementation on top of Redis
///
/// One key per session UUID holding the subject id, expiring with the token
/// it mirrors. `DEL`'s per-key atomicity supplies the delete-with-count
/// contract the core's single-use refresh enforcement relies on.
pub struct RedisSessionStore {
    client: RedisClient,
    config: CacheConfig,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient, config: CacheConfig) -> Self {
        Self { client, config }
    }

    fn key(&self, session_id: &str) -> String {
        self.config.make_key(session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(
        &self,
        session_id: &str,
        subject_id: i64,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        // SETEX rejects a zero expiry; a session that would expire instantly
        // still gets one second on the clock
        let expiry_seconds = ttl.as_secs().max(1);
        debug!(session_id, expiry_seconds, "recording session");

        self.client
            .set_with_expiry(&self.key(session_id), &subject_id.to_string(), expiry_seconds)
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn delete(&self, session_id: &str) -> Result<u64, StoreError> {
        self.client
            .delete(&self.key(session_id))
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn get(&self, session_id: &str) -> Result<Option<i64>, StoreError> {
        let value = self
            .client
            .get(&self.key(session_id))
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;

        match value {
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| StoreError::new(format!("corrupt session record for {}", session_id))),
            None => Ok(None),
        }
    }
}
