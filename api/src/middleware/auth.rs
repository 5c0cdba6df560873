//! JWT authentication middleware.
//!
//! Protected routes accept the access token either from the `accessToken`
//! cookie set at login or from an `Authorization: Bearer` header. The
//! middleware verifies the token, injects an `AuthContext` into request
//! extensions, and rejects with a 401 envelope before any handler runs.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use se_core::domain::entities::token::Claims;
use se_core::errors::{DomainError, DomainResult};
use se_core::repositories::UserRepository;
use se_core::services::TokenService;

use crate::handlers::ApiError;

/// Name of the cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Verifies access tokens without exposing the token service's repository
/// generic to the middleware.
pub trait AccessTokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> DomainResult<Claims>;
}

impl<U: UserRepository> AccessTokenVerifier for TokenService<U> {
    fn verify(&self, token: &str) -> DomainResult<Claims> {
        self.verify_access(token)
    }
}

/// Authenticated caller identity injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
}

impl AuthContext {
    fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::auth("Invalid token"))?;
        Ok(Self { user_id })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required").into());
        ready(result)
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ApiError::unauthorized("Unauthorized request").into());
                }
            };

            let claims = verifier
                .verify(&token)
                .map_err(|e| Error::from(ApiError(e)))?;
            let context =
                AuthContext::from_claims(&claims).map_err(|e| Error::from(ApiError(e)))?;

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Pulls the access token from the cookie, falling back to the
/// Authorization header.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ACCESS_TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    #[test]
    fn bearer_header_is_extracted() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token_abc"))
            .to_srv_request();
        assert_eq!(extract_token(&req), Some("token_abc".to_string()));

        let bare = TestRequest::default()
            .insert_header((AUTHORIZATION, "token_abc"))
            .to_srv_request();
        assert_eq!(extract_token(&bare), None);
    }

    #[test]
    fn cookie_takes_precedence_over_the_header() {
        let req = TestRequest::default()
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "cookie_token"))
            .insert_header((AUTHORIZATION, "Bearer header_token"))
            .to_srv_request();
        assert_eq!(extract_token(&req), Some("cookie_token".to_string()));
    }

    #[test]
    fn missing_credentials_yield_none() {
        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_token(&req), None);
    }
}
