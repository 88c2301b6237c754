use actix_web::{web, HttpResponse};
use validator::Validate;

use tg_core::domain::entities::user::Credential;
use tg_core::errors::AuthError;
use tg_core::repositories::{HostFetcher, ResponseCache, SessionStore, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::login_error;

/// Handler for POST /api/login
///
/// # Request Body
///
/// ```json
/// { "username": "username", "password": "password" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "...", "refresh_token": "..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Body is not valid JSON
/// - 500 Internal Server Error: Invalid credentials, including empty or over-long fields
/// - 422 Unprocessable Entity: Token issuance or session store failure
pub async fn login<U, S, C, F>(
    state: web::Data<AppState<U, S, C, F>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    C: ResponseCache + 'static,
    F: HostFetcher + 'static,
{
    let request = request.into_inner();
    // Out-of-range fields can never match a stored identity
    if request.validate().is_err() {
        return login_error(&AuthError::InvalidCredentials.into());
    }

    let credential = Credential::from(request);
    match state.auth_service.login(&credential).await {
        Ok(tokens) => HttpResponse::Ok().json(TokenResponse::from(tokens)),
        Err(error) => {
            log::info!("Login failed for {}: {}", credential.username, error);
            login_error(&error)
        }
    }
}
