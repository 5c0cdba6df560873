//! Booking repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainResult;

/// Repository contract for Booking records.
///
/// Bookings have exactly two durable states, absent and active; deletion
/// physically removes the row rather than soft-cancelling it.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>>;

    /// All bookings owned by a user, in natural storage order
    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Booking>>;

    /// Persist a new booking
    async fn create(&self, booking: Booking) -> DomainResult<Booking>;

    /// Update an existing booking in place
    async fn update(&self, booking: Booking) -> DomainResult<Booking>;

    /// Remove a booking; returns false when it did not exist
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
