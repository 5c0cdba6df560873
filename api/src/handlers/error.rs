//! Domain error to HTTP response mapping.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; the wrapper maps
//! each domain error variant to exactly one status code and renders the
//! standard error envelope.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use se_core::errors::{DomainError, PaymentErrorKind};
use se_shared::types::ApiErrorBody;

/// Wrapper giving `DomainError` an HTTP rendering
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// Shortcut for a 401 with the standard envelope, used by the JWT
    /// middleware before any handler runs.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError(DomainError::auth(message))
    }

    /// Shortcut for a 400 with the standard envelope
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError(DomainError::validation(message))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Auth { .. } => StatusCode::UNAUTHORIZED,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::Payment { kind, .. } => match kind {
                PaymentErrorKind::CardDeclined => StatusCode::BAD_REQUEST,
                PaymentErrorKind::Provider => StatusCode::INTERNAL_SERVER_ERROR,
            },
            DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        HttpResponse::build(status).json(ApiErrorBody::new(status.as_u16(), self.0.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_maps_to_one_status() {
        let cases = [
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("Hotel"), StatusCode::NOT_FOUND),
            (DomainError::auth("nope"), StatusCode::UNAUTHORIZED),
            (DomainError::conflict("taken"), StatusCode::CONFLICT),
            (DomainError::card_declined("declined"), StatusCode::BAD_REQUEST),
            (
                DomainError::payment_provider("down"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError(error).status_code(), expected);
        }
    }

    #[test]
    fn error_response_carries_the_envelope() {
        let response = ApiError(DomainError::not_found("Booking")).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
