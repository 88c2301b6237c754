//! Mock implementation of SessionStore for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::errors::{DomainError, StoreError};

use super::r#trait::SessionStore;

#[derive(Debug, Clone)]
struct Record {
    value: String,
    expires_at: Instant,
    ttl: Duration,
}

/// Mock session store with per-operation failure injection
///
/// Expiry follows `tokio::time`, so paused-clock tests can advance past it.
#[derive(Clone, Default)]
pub struct MockSessionStore {
    records: Arc<RwLock<HashMap<String, Record>>>,
    failing: Arc<RwLock<HashSet<&'static str>>>,
    /// Number of successful SETs before every further SET fails
    set_budget: Arc<RwLock<Option<usize>>>,
    /// Number of successful DELs before every further DEL fails
    del_budget: Arc<RwLock<Option<usize>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockSessionStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to `operation` ("SET", "GET" or "DEL") fail
    pub async fn fail_on(&self, operation: &'static str) {
        self.failing.write().await.insert(operation);
    }

    /// Let `count` SETs through, then fail the rest
    pub async fn fail_set_after(&self, count: usize) {
        *self.set_budget.write().await = Some(count);
    }

    /// Let `count` DELs through, then fail the rest
    pub async fn fail_del_after(&self, count: usize) {
        *self.del_budget.write().await = Some(count);
    }

    /// Delay every call by `delay`
    pub async fn slow_down(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Write a record directly, bypassing the service under test
    pub async fn insert_raw(&self, key: &str, value: &str, ttl: Duration) {
        self.records.write().await.insert(
            key.to_string(),
            Record {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
                ttl,
            },
        );
    }

    /// TTL the record was written with
    pub async fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.records.read().await.get(key).map(|r| r.ttl)
    }

    /// Keys of all live records
    pub async fn live_keys(&self) -> Vec<String> {
        let now = Instant::now();
        self.records
            .read()
            .await
            .iter()
            .filter(|(_, r)| r.expires_at > now)
            .map(|(k, _)| k.clone())
            .collect()
    }

    async fn before(&self, operation: &'static str) -> Result<(), DomainError> {
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.read().await.contains(operation) {
            return Err(StoreError::Backend {
                message: format!("injected {} failure", operation),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.before("SET").await?;

        let mut budget = self.set_budget.write().await;
        if let Some(remaining) = budget.as_mut() {
            if *remaining == 0 {
                return Err(StoreError::Backend {
                    message: "injected SET failure".to_string(),
                }
                .into());
            }
            *remaining -= 1;
        }
        drop(budget);

        self.insert_raw(key, value, ttl).await;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.before("GET").await?;

        let records = self.records.read().await;
        Ok(records
            .get(key)
            .filter(|r| r.expires_at > Instant::now())
            .map(|r| r.value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<u64, DomainError> {
        self.before("DEL").await?;

        let mut budget = self.del_budget.write().await;
        if let Some(remaining) = budget.as_mut() {
            if *remaining == 0 {
                return Err(StoreError::Backend {
                    message: "injected DEL failure".to_string(),
                }
                .into());
            }
            *remaining -= 1;
        }
        drop(budget);

        let mut records = self.records.write().await;
        match records.remove(key) {
            Some(record) if record.expires_at > Instant::now() => Ok(1),
            _ => Ok(0),
        }
    }
}
