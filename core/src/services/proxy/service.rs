//! Serves cached upstream bodies keyed by requested host

use std::sync::Arc;
use std::time::Duration;

use tg_shared::config::ProxyConfig;

use crate::repositories::{FetchError, HostFetcher, ResponseCache};

#[derive(Debug, Clone)]
pub struct ProxyServiceConfig {
    /// Lifetime of a cached body
    pub cache_ttl: Duration,
    /// Scheme used to reach upstream hosts
    pub upstream_scheme: String,
}

impl Default for ProxyServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5 * 60),
            upstream_scheme: "http".to_string(),
        }
    }
}

impl From<&ProxyConfig> for ProxyServiceConfig {
    fn from(proxy: &ProxyConfig) -> Self {
        Self {
            cache_ttl: Duration::from_secs(proxy.cache_ttl),
            upstream_scheme: proxy.upstream_scheme.clone(),
        }
    }
}

/// Read-through cache in front of upstream hosts
pub struct ProxyService<C, F>
where
    C: ResponseCache,
    F: HostFetcher,
{
    cache: Arc<C>,
    fetcher: Arc<F>,
    config: ProxyServiceConfig,
}

impl<C, F> ProxyService<C, F>
where
    C: ResponseCache,
    F: HostFetcher,
{
    pub fn new(cache: Arc<C>, fetcher: Arc<F>, config: ProxyServiceConfig) -> Self {
        Self {
            cache,
            fetcher,
            config,
        }
    }

    /// Cached body for `host`
    pub async fn lookup(&self, host: &str) -> Option<String> {
        let hit = self.cache.get(host).await;
        tracing::debug!(host, hit = hit.is_some(), "Proxy cache lookup");
        hit
    }

    /// Fetches `host` upstream and caches the body on success
    pub async fn fetch_and_store(&self, host: &str) -> Result<(), FetchError> {
        let url = format!("{}://{}", self.config.upstream_scheme, host);

        match self.fetcher.retrieve(&url).await {
            Ok(body) => {
                self.cache.set(host, &body, self.config.cache_ttl).await;
                tracing::info!(host, bytes = body.len(), "Cached upstream response");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(host, status = e.status, error = %e, "Upstream fetch failed");
                Err(e)
            }
        }
    }
}
