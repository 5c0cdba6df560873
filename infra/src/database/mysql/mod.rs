//! MySQL repository implementations

mod booking_repository_impl;
mod hotel_repository_impl;
mod review_repository_impl;
mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use hotel_repository_impl::MySqlHotelRepository;
pub use review_repository_impl::MySqlReviewRepository;
pub use user_repository_impl::MySqlUserRepository;

use se_core::errors::DomainError;

/// Wraps an SQLx error into the domain error taxonomy, reporting the
/// failed operation.
pub(crate) fn db_error(operation: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(operation, %error, "database operation failed");
    DomainError::internal(format!("Failed to {operation}: {error}"))
}

/// True when the error is a unique-key violation.
pub(crate) fn is_duplicate(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
