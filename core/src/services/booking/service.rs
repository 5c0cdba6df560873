//! Booking lifecycle implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, HotelRepository};
use crate::services::pricing;

/// Validated input for creating or updating a booking
#[derive(Debug, Clone, Copy)]
pub struct BookingRequest {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub rooms: u32,
}

impl BookingRequest {
    /// Checks the window ordering and room count.
    ///
    /// `check_out == check_in` and `check_out < check_in` are rejected
    /// identically; a valid window always spans at least one night.
    fn validate(&self) -> DomainResult<()> {
        if self.rooms == 0 {
            return Err(DomainError::validation(
                "Number of rooms must be a positive integer",
            ));
        }
        if self.check_out <= self.check_in {
            return Err(DomainError::validation(
                "Check-out date must be after check-in date",
            ));
        }
        Ok(())
    }
}

/// Service managing the booking lifecycle.
///
/// A booking has two durable states, absent and active. Cancellation is a
/// physical delete back to absent; there is no soft-cancel state.
pub struct BookingService<H, B>
where
    H: HotelRepository,
    B: BookingRepository,
{
    hotels: Arc<H>,
    bookings: Arc<B>,
}

impl<H, B> BookingService<H, B>
where
    H: HotelRepository,
    B: BookingRepository,
{
    pub fn new(hotels: Arc<H>, bookings: Arc<B>) -> Self {
        Self { hotels, bookings }
    }

    /// Creates a booking for `user_id` against `hotel_id`.
    ///
    /// Looks up the hotel's current price and name, computes the total,
    /// and persists the record. No availability check is performed, so
    /// concurrent requests for the same hotel and window both succeed.
    pub async fn create(
        &self,
        hotel_id: Uuid,
        user_id: Uuid,
        request: BookingRequest,
    ) -> DomainResult<Booking> {
        request.validate()?;

        let hotel = self
            .hotels
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Hotel"))?;

        let total = pricing::compute_total(
            hotel.price,
            request.check_in,
            request.check_out,
            request.rooms,
        )?;

        let booking = Booking::new(
            hotel.id,
            hotel.name.clone(),
            user_id,
            request.check_in,
            request.check_out,
            request.rooms,
            total,
        );

        tracing::info!(
            booking_id = %booking.id,
            hotel_id = %hotel.id,
            total_amount = total,
            "booking created"
        );

        self.bookings.create(booking).await
    }

    /// Returns a booking by id. Any caller holding a valid identifier may
    /// read any booking; ownership is not checked here.
    pub async fn get(&self, booking_id: Uuid) -> DomainResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))
    }

    /// All bookings owned by the given user
    pub async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Booking>> {
        self.bookings.find_by_user(user_id).await
    }

    /// Updates the dates and room count of a booking.
    ///
    /// The total is recomputed from the hotel's *current* nightly price,
    /// not the price in effect when the booking was made. Returns the
    /// pre-update snapshot of the record.
    pub async fn update(&self, booking_id: Uuid, request: BookingRequest) -> DomainResult<Booking> {
        request.validate()?;

        let existing = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        let hotel = self
            .hotels
            .find_by_id(existing.hotel)
            .await?
            .ok_or_else(|| DomainError::not_found("Hotel"))?;

        let total = pricing::compute_total(
            hotel.price,
            request.check_in,
            request.check_out,
            request.rooms,
        )?;

        let mut updated = existing.clone();
        updated.check_in = request.check_in;
        updated.check_out = request.check_out;
        updated.rooms = request.rooms;
        updated.total_amount = total;
        updated.updated_at = Utc::now();

        self.bookings.update(updated).await?;

        tracing::info!(booking_id = %booking_id, total_amount = total, "booking updated");

        Ok(existing)
    }

    /// Removes a booking unconditionally
    pub async fn delete(&self, booking_id: Uuid) -> DomainResult<()> {
        if !self.bookings.delete(booking_id).await? {
            return Err(DomainError::not_found("Booking"));
        }
        tracing::info!(booking_id = %booking_id, "booking deleted");
        Ok(())
    }
}
