//! Application state and factory
//!
//! This module holds the services shared by all workers and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::BoxBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};

use tg_core::repositories::{HostFetcher, ResponseCache, SessionStore, UserRepository};
use tg_core::services::{AuthService, ProxyService, SessionGate};
use tg_shared::errors::error_codes;

use crate::handlers::{error_response, json_error_handler};
use crate::middleware::RequireLogin;
use crate::routes::{
    auth::{login::login, logout::logout, refresh::refresh},
    health::health_check,
    proxy::{fetch_upstream, serve_cached},
};

/// Services shared by every handler
pub struct AppState<U, S, C, F>
where
    U: UserRepository,
    S: SessionStore,
    C: ResponseCache,
    F: HostFetcher,
{
    pub auth_service: Arc<AuthService<U, S>>,
    pub proxy_service: Arc<ProxyService<C, F>>,
}

/// Create and configure the application with all dependencies
///
/// Request logging is left to the caller so tests can run without it.
pub fn create_app<U, S, C, F>(
    app_state: web::Data<AppState<U, S, C, F>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    C: ResponseCache + 'static,
    F: HostFetcher + 'static,
{
    let gate: Arc<dyn SessionGate> = app_state.auth_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(gate))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health_check))
                .route("/login", web::post().to(login::<U, S, C, F>))
                .route("/logout", web::post().to(logout::<U, S, C, F>))
                .route("/refresh", web::post().to(refresh::<U, S, C, F>))
                .service(
                    web::resource("/assert")
                        .wrap(RequireLogin)
                        .route(web::get().to(serve_cached::<U, S, C, F>))
                        .route(web::post().to(fetch_upstream::<U, S, C, F>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
}
