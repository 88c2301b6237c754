//! Caching proxy keyed by the request's Host

use actix_web::{
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse,
};
use std::collections::HashMap;

use tg_core::repositories::{
    HostFetcher, ResponseCache, SessionStore, UserRepository, FETCH_FAILED,
};

use crate::app::AppState;

/// Host the client addressed, from the `Host` header or the request URI
///
/// `Forwarded` and `X-Forwarded-Host` are ignored.
fn request_host(req: &HttpRequest) -> String {
    req.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| req.uri().authority().map(|authority| authority.as_str()))
        .unwrap_or_default()
        .to_string()
}

/// Handler for GET /api/assert
///
/// Serves the cached body as `{ "<host>": "<body>" }`, or 404 on miss.
pub async fn serve_cached<U, S, C, F>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C, F>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    C: ResponseCache + 'static,
    F: HostFetcher + 'static,
{
    let host = request_host(&req);

    match state.proxy_service.lookup(&host).await {
        Some(body) => HttpResponse::Ok().json(HashMap::from([(host, body)])),
        None => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Host not found: {}", host)),
    }
}

/// Handler for POST /api/assert
///
/// Fetches `http://<host>` and caches the body when upstream answers 200.
/// Otherwise replies with the upstream status, or 500 when none was received.
pub async fn fetch_upstream<U, S, C, F>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C, F>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    C: ResponseCache + 'static,
    F: HostFetcher + 'static,
{
    let host = request_host(&req);

    match state.proxy_service.fetch_and_store(&host).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(FETCH_FAILED)
        }
    }
}
