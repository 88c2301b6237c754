use actix_web::HttpResponse;

/// Handler for GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}
