//! Mapping of domain failures to HTTP responses

use actix_web::{error::InternalError, http::StatusCode, HttpRequest, HttpResponse};

use tg_core::errors::{AuthError, DomainError};
use tg_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Build an error envelope response
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    ErrorResponse::new(code, message).to_response(status)
}

/// 401 with the standard envelope
pub fn unauthorized(message: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message)
}

/// Login failures: bad credentials are 500, issuance or store failures 422
pub fn login_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INVALID_CREDENTIALS,
            error.to_string(),
        ),
        _ => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            error_codes::UNPROCESSABLE,
            error.to_string(),
        ),
    }
}

/// Refresh failures: a bad refresh token is 401, anything after verification 403
pub fn refresh_error(error: &DomainError) -> HttpResponse {
    if error.is_token_verification_failure() {
        unauthorized("unauthorized")
    } else {
        error_response(StatusCode::FORBIDDEN, error_codes::FORBIDDEN, error.to_string())
    }
}

/// `JsonConfig` error handler turning unparseable bodies into 400 envelopes
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = error_response(
        StatusCode::BAD_REQUEST,
        error_codes::BAD_REQUEST,
        format!("Invalid JSON: {}", err),
    );
    InternalError::from_response(err, response).into()
}
