//! Fetches upstream bodies for the caching proxy

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use tg_core::repositories::{FetchError, HostFetcher, FETCH_FAILED};
use tg_shared::config::ProxyConfig;

use crate::InfrastructureError;

/// `reqwest` client with a bounded idle pool
#[derive(Clone)]
pub struct ReqwestHostFetcher {
    client: Client,
}

impl ReqwestHostFetcher {
    pub fn new(config: &ProxyConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_connections)
            .pool_idle_timeout(Duration::from_secs(config.idle_timeout))
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HostFetcher for ReqwestHostFetcher {
    async fn retrieve(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(url, error = %e, "Upstream request failed");
            FetchError::transport(FETCH_FAILED)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or(FETCH_FAILED);
            return Err(FetchError::new(status.as_u16(), reason));
        }

        response.text().await.map_err(|e| {
            tracing::warn!(url, error = %e, "Failed to read upstream body");
            FetchError::transport(FETCH_FAILED)
        })
    }
}
