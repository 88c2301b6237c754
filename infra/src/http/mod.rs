//! Upstream HTTP client

pub mod host_fetcher;

pub use host_fetcher::ReqwestHostFetcher;
