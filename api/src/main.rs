use actix_web::{middleware::Logger, web, HttpServer};
use log::{info, warn};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tg_api::app::{create_app, AppState};
use tg_core::repositories::{SessionStore, StaticUserRepository};
use tg_core::services::{
    AuthService, AuthServiceConfig, ProxyService, ProxyServiceConfig, TokenService,
    TokenServiceConfig,
};
use tg_infra::{
    MemoryResponseCache, MemorySessionStore, RedisClient, RedisSessionStore, ReqwestHostFetcher,
};
use tg_shared::config::{AppConfig, SessionBackend};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::from_env();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting Tollgate API Server ({})", config.environment);

    config.validate().map_err(startup_error)?;
    if config.auth.is_using_default_secrets() {
        warn!("ACCESS_SECRET / REFRESH_SECRET not set, using development secrets");
    }

    match config.cache.backend {
        SessionBackend::Redis => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .map_err(startup_error)?;
            run(config, RedisSessionStore::new(client)).await
        }
        SessionBackend::Memory => {
            warn!("Using in-process session store; sessions are lost on restart");
            let store = MemorySessionStore::new();
            spawn_purge_task(
                Duration::from_secs(config.proxy.cleanup_interval),
                store.clone(),
                |store| async move {
                    store.purge_expired().await;
                },
            );
            run(config, store).await
        }
    }
}

async fn run<S>(config: AppConfig, store: S) -> io::Result<()>
where
    S: SessionStore + 'static,
{
    let tokens = TokenService::new(Arc::new(store), TokenServiceConfig::from(&config.auth))
        .map_err(startup_error)?;
    let users = StaticUserRepository::from_reference(&config.auth.reference_user);
    let auth_service = Arc::new(AuthService::new(
        Arc::new(users),
        Arc::new(tokens),
        AuthServiceConfig::from(&config.auth),
    ));

    let cache = MemoryResponseCache::new();
    let fetcher = ReqwestHostFetcher::new(&config.proxy).map_err(startup_error)?;
    let proxy_service = Arc::new(ProxyService::new(
        Arc::new(cache.clone()),
        Arc::new(fetcher),
        ProxyServiceConfig::from(&config.proxy),
    ));

    spawn_purge_task(
        Duration::from_secs(config.proxy.cleanup_interval),
        cache,
        |cache| async move {
            cache.purge_expired().await;
        },
    );

    let app_state = web::Data::new(AppState {
        auth_service,
        proxy_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()).wrap(Logger::default()))
        .keep_alive(Duration::from_secs(config.server.keep_alive))
        .client_request_timeout(Duration::from_secs(config.server.request_timeout));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}

fn spawn_purge_task<T, F, Fut>(every: Duration, target: T, purge: F)
where
    T: Clone + 'static,
    F: Fn(T) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(every.max(Duration::from_secs(1)));
        // First tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            purge(target.clone()).await;
        }
    });
}

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}
