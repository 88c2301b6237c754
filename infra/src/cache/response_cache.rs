//! In-process cache of proxied upstream bodies

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use tg_core::repositories::ResponseCache;

#[derive(Debug, Clone)]
struct Entry {
    body: String,
    expires_at: Instant,
}

/// Host-keyed TTL map
///
/// Expired entries are hidden on read and removed by [`purge_expired`](Self::purge_expired).
#[derive(Clone, Default)]
pub struct MemoryResponseCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, "Purged expired proxy cache entries");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ResponseCache for MemoryResponseCache {
    async fn get(&self, host: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(host)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.body.clone())
    }

    async fn set(&self, host: &str, body: &str, ttl: Duration) {
        self.entries.write().await.insert(
            host.to_string(),
            Entry {
                body: body.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire() {
        let cache = MemoryResponseCache::new();
        cache.set("example.com", "body", Duration::from_secs(300)).await;
        assert_eq!(cache.get("example.com").await.as_deref(), Some("body"));

        tokio::time::advance(Duration::from_secs(301)).await;

        assert_eq!(cache.get("example.com").await, None);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.purge_expired().await, 1);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryResponseCache::new();
        cache.set("h", "one", Duration::from_secs(60)).await;
        cache.set("h", "two", Duration::from_secs(60)).await;
        assert_eq!(cache.get("h").await.as_deref(), Some("two"));
    }
}
