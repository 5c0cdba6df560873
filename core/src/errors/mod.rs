//! Domain-specific error types and error handling.
//!
//! Every operation in the core crate returns `DomainResult`, and the HTTP
//! layer maps each variant to exactly one status code. The taxonomy mirrors
//! the API surface: bad input, missing entity, failed authentication,
//! uniqueness conflicts, payment failures, and everything else.

use thiserror::Error;

/// Classifies a payment failure: card-class failures are user-correctable
/// and surface as client errors, everything else is treated as internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentErrorKind {
    /// The customer's card was declined (or an equivalent user-facing
    /// failure the customer can fix by retrying with another card)
    CardDeclined,
    /// Any other provider-side failure
    Provider,
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Auth { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Payment {
        kind: PaymentErrorKind,
        message: String,
    },

    #[error("{message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        DomainError::Auth {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn card_declined(message: impl Into<String>) -> Self {
        DomainError::Payment {
            kind: PaymentErrorKind::CardDeclined,
            message: message.into(),
        }
    }

    pub fn payment_provider(message: impl Into<String>) -> Self {
        DomainError::Payment {
            kind: PaymentErrorKind::Provider,
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_resource() {
        let error = DomainError::not_found("Booking");
        assert_eq!(error.to_string(), "Booking not found");
    }

    #[test]
    fn payment_kinds_are_distinguished() {
        let declined = DomainError::card_declined("card declined");
        let provider = DomainError::payment_provider("gateway timeout");

        assert!(matches!(
            declined,
            DomainError::Payment {
                kind: PaymentErrorKind::CardDeclined,
                ..
            }
        ));
        assert!(matches!(
            provider,
            DomainError::Payment {
                kind: PaymentErrorKind::Provider,
                ..
            }
        ));
    }
}
