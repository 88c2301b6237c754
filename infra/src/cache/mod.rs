//! Session and response caches
//!
//! Redis backs sessions in deployment; the in-memory stores serve
//! development and tests.

pub mod memory_session_store;
pub mod redis_client;
pub mod response_cache;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use memory_session_store::MemorySessionStore;
pub use redis_client::RedisClient;
pub use response_cache::MemoryResponseCache;
pub use session_store::RedisSessionStore;

// Re-export commonly used types
pub use tg_shared::config::CacheConfig;
