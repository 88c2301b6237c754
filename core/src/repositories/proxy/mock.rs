//! Mock implementations of the proxy collaborators for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::r#trait::{FetchError, HostFetcher, ResponseCache};

/// Cache recording the TTL of each write
#[derive(Clone, Default)]
pub struct MockResponseCache {
    pub entries: Arc<Mutex<HashMap<String, (String, Duration)>>>,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseCache for MockResponseCache {
    async fn get(&self, host: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(host)
            .map(|(body, _)| body.clone())
    }

    async fn set(&self, host: &str, body: &str, ttl: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(host.to_string(), (body.to_string(), ttl));
    }
}

/// Fetcher answering every URL with a canned result
#[derive(Clone)]
pub struct MockHostFetcher {
    pub response: Result<String, FetchError>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockHostFetcher {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl HostFetcher for MockHostFetcher {
    async fn retrieve(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}
