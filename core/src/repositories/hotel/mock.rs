//! Mock implementation of HotelRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::hotel::Hotel;
use crate::errors::{DomainError, DomainResult};

use super::trait_::HotelRepository;

/// In-memory hotel repository for unit tests
#[derive(Default)]
pub struct MockHotelRepository {
    hotels: Arc<RwLock<HashMap<Uuid, Hotel>>>,
}

impl MockHotelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, hotel: Hotel) {
        self.hotels.write().await.insert(hotel.id, hotel);
    }

    /// Change the nightly price of a stored hotel, used to exercise the
    /// recompute-on-update behavior of the booking service.
    pub async fn set_price(&self, id: Uuid, price: f64) {
        if let Some(hotel) = self.hotels.write().await.get_mut(&id) {
            hotel.price = price;
        }
    }
}

#[async_trait]
impl HotelRepository for MockHotelRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Hotel>> {
        Ok(self.hotels.read().await.get(&id).cloned())
    }

    async fn list(&self, offset: u64, limit: u32) -> DomainResult<Vec<Hotel>> {
        let hotels = self.hotels.read().await;
        let mut all: Vec<Hotel> = hotels.values().cloned().collect();
        all.sort_by_key(|h| h.created_at);
        Ok(all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn create(&self, hotel: Hotel) -> DomainResult<Hotel> {
        self.hotels.write().await.insert(hotel.id, hotel.clone());
        Ok(hotel)
    }

    async fn update(&self, hotel: Hotel) -> DomainResult<Hotel> {
        let mut hotels = self.hotels.write().await;

        if !hotels.contains_key(&hotel.id) {
            return Err(DomainError::not_found("Hotel"));
        }

        hotels.insert(hotel.id, hotel.clone());
        Ok(hotel)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.hotels.write().await.remove(&id).is_some())
    }
}
