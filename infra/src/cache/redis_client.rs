//! Redis client backing the session store
//!
//! Connection setup retries with exponential backoff. Individual commands
//! are not retried; a failed command is reported to the caller as is.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use tg_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Base delay between connection attempts
const RETRY_DELAY_MS: u64 = 100;

/// Redis client over a multiplexed async connection
///
/// Cloning is cheap; clones share the underlying connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Connect to Redis
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    ///
    /// # Example
    /// ```no_run
    /// use tg_infra::cache::{CacheConfig, RedisClient};
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379");
    ///     let client = RedisClient::new(config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::create_connection_with_retry(&client, &config).await?;

        info!("Redis client created successfully");

        Ok(Self { connection, config })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: &Client,
        config: &CacheConfig,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let max_attempts = config.connect_retries.max(1);
        let timeout = Duration::from_secs(config.connection_timeout);
        let mut attempts = 0;
        let mut delay = RETRY_DELAY_MS;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let outcome =
                tokio::time::timeout(timeout, client.get_multiplexed_async_connection()).await;

            let failure = match outcome {
                Ok(Ok(connection)) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Ok(Err(e)) => InfrastructureError::Cache(e),
                Err(_) => InfrastructureError::Config(format!(
                    "Redis connection timed out after {}s",
                    config.connection_timeout
                )),
            };

            if attempts >= max_attempts {
                error!(
                    "Failed to connect to Redis after {} attempts: {}",
                    attempts, failure
                );
                return Err(failure);
            }

            warn!(
                "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                attempts, max_attempts, failure, delay
            );
            sleep(Duration::from_millis(delay)).await;
            // Exponential backoff with cap at 5 seconds
            delay = (delay * 2).min(5000);
        }
    }

    /// Set a value with expiration time in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, expiry_seconds)
            .await
            .map_err(|e| {
                error!("Failed to set key '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })
    }

    /// Get a value, `None` if the key is absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        let mut conn = self.connection.clone();
        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!("Failed to get key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Delete a key
    ///
    /// # Returns
    /// * `Result<u64, InfrastructureError>` - Number of keys removed
    pub async fn delete(&self, key: &str) -> Result<u64, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        let mut conn = self.connection.clone();
        let deleted = conn.del::<_, u64>(key).await.map_err(|e| {
            error!("Failed to delete key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })?;

        if deleted == 0 {
            debug!("Key '{}' was not found", key);
        }
        Ok(deleted)
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) if response == "PONG" => Ok(true),
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }
}

/// Mask credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
