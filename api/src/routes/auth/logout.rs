use actix_web::{web, HttpRequest, HttpResponse};

use tg_core::repositories::{HostFetcher, ResponseCache, SessionStore, UserRepository};

use crate::app::AppState;
use crate::dto::auth::LOGOUT_MESSAGE;
use crate::handlers::error::unauthorized;
use crate::middleware::auth::extract_bearer_token;

/// Handler for POST /api/logout
///
/// Revokes the session behind the presented access token.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// "Successfully logged out"
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Invalid token, or session already gone
pub async fn logout<U, S, C, F>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C, F>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    C: ResponseCache + 'static,
    F: HostFetcher + 'static,
{
    let token = extract_bearer_token(req.headers());

    match state.auth_service.logout(&token).await {
        Ok(()) => HttpResponse::Ok().json(LOGOUT_MESSAGE),
        Err(error) => {
            log::debug!("Logout rejected: {}", error);
            unauthorized("unauthorized")
        }
    }
}
