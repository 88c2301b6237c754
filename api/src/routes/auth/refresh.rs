use actix_web::{web, HttpResponse};
use validator::Validate;

use tg_core::repositories::{HostFetcher, ResponseCache, SessionStore, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::error::{refresh_error, unauthorized};

/// Handler for POST /api/refresh
///
/// Exchanges a refresh token for a new token pair. The presented refresh
/// session is revoked; a second exchange with it fails.
///
/// ## Errors
/// - 401 Unauthorized: Refresh token failed verification
/// - 403 Forbidden: Session already revoked, issuance or store failure
pub async fn refresh<U, S, C, F>(
    state: web::Data<AppState<U, S, C, F>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    C: ResponseCache + 'static,
    F: HostFetcher + 'static,
{
    if request.validate().is_err() {
        return unauthorized("unauthorized");
    }

    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(tokens) => HttpResponse::Ok().json(TokenResponse::from(tokens)),
        Err(error) => {
            log::debug!("Refresh rejected: {}", error);
            refresh_error(&error)
        }
    }
}
