//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::{DomainError, DomainResult};

use super::trait_::BookingRepository;

/// In-memory booking repository for unit tests
#[derive(Default)]
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        let mut owned: Vec<Booking> = bookings
            .values()
            .filter(|b| b.user == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|b| b.created_at);
        Ok(owned)
    }

    async fn create(&self, booking: Booking) -> DomainResult<Booking> {
        self.bookings
            .write()
            .await
            .insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        let mut bookings = self.bookings.write().await;

        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking"));
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.bookings.write().await.remove(&id).is_some())
    }
}
