//! Session gate middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, asks the
//! registered [`SessionGate`] whether it belongs to a live session, and
//! injects the resulting [`AuthContext`] into the request. Any failure is
//! answered with 401 before the wrapped service runs.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use tg_core::domain::entities::token::AccessDetails;
use tg_core::services::SessionGate;

use crate::handlers::error::unauthorized;

/// Authenticated session injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Owner of the session
    pub user_id: u64,
    /// Access session id
    pub session_id: String,
}

impl From<AccessDetails> for AuthContext {
    fn from(details: AccessDetails) -> Self {
        Self {
            user_id: details.user_id,
            session_id: details.session_id,
        }
    }
}

/// Session gate middleware factory
///
/// Expects `web::Data<Arc<dyn SessionGate>>` in app data.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireLogin;

impl<S, B> Transform<S, ServiceRequest> for RequireLogin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireLoginMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireLoginMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session gate middleware service
pub struct RequireLoginMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireLoginMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token = extract_bearer_token(req.headers());
        let gate = req.app_data::<web::Data<Arc<dyn SessionGate>>>().cloned();

        Box::pin(async move {
            let Some(gate) = gate else {
                log::error!("No session gate registered; rejecting {}", req.path());
                return Ok(reject(req, "unauthorized"));
            };

            match gate.authorize(&token).await {
                Ok(details) => {
                    req.extensions_mut().insert(AuthContext::from(details));
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    log::debug!("Rejected request to {}: {}", req.path(), e);
                    Ok(reject(req, e.to_string()))
                }
            }
        })
    }
}

fn reject<B>(req: ServiceRequest, message: impl Into<String>) -> ServiceResponse<EitherBody<B>> {
    let (req, _payload) = req.into_parts();
    ServiceResponse::new(req, unauthorized(message)).map_into_right_body()
}

/// Extracts the token from an `Authorization: <scheme> <token>` header
///
/// Anything other than exactly two space-separated parts yields an empty
/// string, which then fails verification.
pub fn extract_bearer_token(headers: &HeaderMap) -> String {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() == 2 {
        parts[1].to_string()
    } else {
        String::new()
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
