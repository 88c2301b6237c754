//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use tg_api::app::AppState;
use tg_core::repositories::{FetchError, HostFetcher, StaticUserRepository};
use tg_core::services::{
    AuthService, AuthServiceConfig, ProxyService, ProxyServiceConfig, TokenService,
    TokenServiceConfig,
};
use tg_infra::{MemoryResponseCache, MemorySessionStore};
use tg_shared::config::ReferenceUser;

/// Upstream stub answering every URL with a canned result
#[derive(Clone)]
pub struct StubFetcher {
    pub response: Result<String, FetchError>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl StubFetcher {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            response: Err(FetchError::new(status, "upstream said no")),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl HostFetcher for StubFetcher {
    async fn retrieve(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

pub type TestState =
    AppState<StaticUserRepository, MemorySessionStore, MemoryResponseCache, StubFetcher>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub store: MemorySessionStore,
    pub cache: MemoryResponseCache,
}

pub fn create_context(fetcher: StubFetcher) -> TestContext {
    create_context_with(fetcher, AuthServiceConfig::default())
}

pub fn create_context_with(fetcher: StubFetcher, auth_config: AuthServiceConfig) -> TestContext {
    let store = MemorySessionStore::new();
    let cache = MemoryResponseCache::new();

    let tokens = TokenService::new(
        Arc::new(store.clone()),
        TokenServiceConfig::new("test-access-secret", "test-refresh-secret"),
    )
    .expect("Failed to create token service");
    let users = StaticUserRepository::from_reference(&ReferenceUser::default());

    let auth_service = Arc::new(AuthService::new(
        Arc::new(users),
        Arc::new(tokens),
        auth_config,
    ));
    let proxy_service = Arc::new(ProxyService::new(
        Arc::new(cache.clone()),
        Arc::new(fetcher),
        ProxyServiceConfig::default(),
    ));

    TestContext {
        state: web::Data::new(AppState {
            auth_service,
            proxy_service,
        }),
        store,
        cache,
    }
}

pub fn login_body() -> serde_json::Value {
    serde_json::json!({ "username": "username", "password": "password" })
}
