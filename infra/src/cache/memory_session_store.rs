//! In-process session store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use tg_core::errors::DomainError;
use tg_core::repositories::SessionStore;

/// TTL map of session records
///
/// Records are not shared between processes; meant for development and tests.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    records: Arc<RwLock<HashMap<String, (String, Instant)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired records, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, (_, expires_at)| *expires_at > now);
        before - records.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .get(key)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(value, _)| value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<u64, DomainError> {
        let removed = self.records.write().await.remove(key);
        Ok(match removed {
            Some((_, expires_at)) if expires_at > Instant::now() => 1,
            _ => 0,
        })
    }
}
