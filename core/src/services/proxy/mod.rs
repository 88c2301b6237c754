//! Read-through proxy service

mod service;

pub use service::{ProxyService, ProxyServiceConfig};
