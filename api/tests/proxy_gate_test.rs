//! Integration tests for the gated caching proxy

mod common;

use actix_web::{
    http::{header, StatusCode},
    test,
};
use serde_json::Value;
use std::time::Duration;

use common::{create_context, login_body, StubFetcher};
use tg_api::app::create_app;
use tg_core::repositories::{ResponseCache, SessionStore};

fn login_request() -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/login")
        .set_json(login_body())
}

fn bearer(tokens: &Value) -> (header::HeaderName, String) {
    (
        header::AUTHORIZATION,
        format!("Bearer {}", tokens["access_token"].as_str().unwrap()),
    )
}

#[actix_web::test]
async fn test_missing_authorization_is_401() {
    let ctx = create_context(StubFetcher::ok("body"));
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_malformed_authorization_is_401() {
    let ctx = create_context(StubFetcher::ok("body"));
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tokens: Value =
        test::call_and_read_body_json(&app, login_request().to_request()).await;

    // Bare token without a scheme
    let req = test::TestRequest::get()
        .uri("/api/assert")
        .insert_header((header::AUTHORIZATION, tokens["access_token"].as_str().unwrap()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_post_caches_then_get_serves() {
    let fetcher = StubFetcher::ok("<h1>cached</h1>");
    let requested = fetcher.requested.clone();
    let ctx = create_context(fetcher);
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tokens: Value =
        test::call_and_read_body_json(&app, login_request().to_request()).await;

    let req = test::TestRequest::get()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .insert_header(bearer(&tokens))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "Host not found: example.com");

    let req = test::TestRequest::post()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .insert_header(bearer(&tokens))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "ok": true }));
    assert_eq!(requested.lock().unwrap().as_slice(), ["http://example.com"]);

    let req = test::TestRequest::get()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .insert_header(bearer(&tokens))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!({ "example.com": "<h1>cached</h1>" }));
}

#[actix_web::test]
async fn test_forwarding_headers_do_not_pick_the_host() {
    let fetcher = StubFetcher::ok("<h1>cached</h1>");
    let requested = fetcher.requested.clone();
    let ctx = create_context(fetcher);
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tokens: Value =
        test::call_and_read_body_json(&app, login_request().to_request()).await;

    let req = test::TestRequest::post()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .insert_header(("x-forwarded-host", "other.test"))
        .insert_header((header::FORWARDED, "host=other.test"))
        .insert_header(bearer(&tokens))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    assert_eq!(requested.lock().unwrap().as_slice(), ["http://example.com"]);
    assert!(ctx.cache.get("example.com").await.is_some());
    assert!(ctx.cache.get("other.test").await.is_none());
}

#[actix_web::test]
async fn test_upstream_status_is_forwarded() {
    let ctx = create_context(StubFetcher::status(404));
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tokens: Value =
        test::call_and_read_body_json(&app, login_request().to_request()).await;

    let req = test::TestRequest::post()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .insert_header(bearer(&tokens))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "failed to get the request");
    assert!(ctx.cache.get("example.com").await.is_none());
}

#[actix_web::test]
async fn test_revoked_session_is_401() {
    let ctx = create_context(StubFetcher::ok("body"));
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tokens: Value =
        test::call_and_read_body_json(&app, login_request().to_request()).await;

    let req = test::TestRequest::post()
        .uri("/api/logout")
        .insert_header(bearer(&tokens))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .insert_header(bearer(&tokens))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_identity_mismatch_is_401() {
    let ctx = create_context(StubFetcher::ok("body"));
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tokens: Value =
        test::call_and_read_body_json(&app, login_request().to_request()).await;

    let details = ctx
        .state
        .auth_service
        .token_service()
        .verify_access(tokens["access_token"].as_str().unwrap())
        .unwrap();
    ctx.store
        .set(&details.session_id, "99", Duration::from_secs(60))
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/assert")
        .insert_header((header::HOST, "example.com"))
        .insert_header(bearer(&tokens))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
