//! In-memory session ledger for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::SessionStore;
use crate::errors::StoreError;

/// Mutex-backed session ledger mirroring the external store contract
///
/// Expiry is enforced lazily on access. Delete-with-count is atomic under the
/// map lock, which is what the single-use refresh property needs.
#[derive(Default)]
pub struct InMemorySessionStore {
    records: Mutex<HashMap<String, SessionRecord>>,
}

struct SessionRecord {
    subject_id: i64,
    expires_at: Instant,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) records currently held
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.records
            .lock()
            .expect("session map poisoned")
            .values()
            .filter(|r| r.expires_at > now)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(
        &self,
        session_id: &str,
        subject_id: i64,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("session map poisoned");
        records.insert(
            session_id.to_string(),
            SessionRecord {
                subject_id,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<u64, StoreError> {
        let mut records = self.records.lock().expect("session map poisoned");
        match records.remove(session_id) {
            Some(record) if record.expires_at > Instant::now() => Ok(1),
            _ => Ok(0),
        }
    }

    async fn get(&self, session_id: &str) -> Result<Option<i64>, StoreError> {
        let records = self.records.lock().expect("session map poisoned");
        Ok(records
            .get(session_id)
            .filter(|r| r.expires_at > Instant::now())
            .map(|r| r.subject_id))
    }
}
