//! Session ledger trait defining the interface for active-session tracking.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::StoreError;

/// Key-value ledger recording active session identifiers with TTL
///
/// One record exists per token UUID, created at issuance and removed by
/// logout (access UUID) or refresh rotation (refresh UUID); records that are
/// never explicitly removed expire on their own once the token they mirror
/// has expired.
///
/// # Atomicity
///
/// `delete` must be atomic per key and report an accurate count. Concurrent
/// consumers of the same UUID rely on that count to distinguish "I revoked
/// it" (1) from "someone already did" (0); this is what bounds a refresh
/// token to a single successful rotation without in-process locking.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Record an active session with the given time-to-live
    async fn put(&self, session_id: &str, subject_id: i64, ttl: Duration)
        -> Result<(), StoreError>;

    /// Remove a session record, returning the number of records removed
    async fn delete(&self, session_id: &str) -> Result<u64, StoreError>;

    /// Look up the subject recorded for a session, if still present
    async fn get(&self, session_id: &str) -> Result<Option<i64>, StoreError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn put(
        &self,
        session_id: &str,
        subject_id: i64,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        (**self).put(session_id, subject_id, ttl).await
    }

    async fn delete(&self, session_id: &str) -> Result<u64, StoreError> {
        (**self).delete(session_id).await
    }

    async fn get(&self, session_id: &str) -> Result<Option<i64>, StoreError> {
        (**self).get(session_id).await
    }
}
