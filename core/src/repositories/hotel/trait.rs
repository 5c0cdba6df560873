//! Hotel repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::hotel::Hotel;
use crate::errors::DomainResult;

/// Repository contract for Hotel listings
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Find a hotel by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Hotel>>;

    /// List hotels in natural storage order with offset/limit pagination
    async fn list(&self, offset: u64, limit: u32) -> DomainResult<Vec<Hotel>>;

    /// Persist a new hotel listing
    async fn create(&self, hotel: Hotel) -> DomainResult<Hotel>;

    /// Update an existing listing in place
    async fn update(&self, hotel: Hotel) -> DomainResult<Hotel>;

    /// Delete a listing; returns false when it did not exist
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
