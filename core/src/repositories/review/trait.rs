//! Review repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainResult;

/// Repository contract for hotel reviews
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find a review by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Review>>;

    /// All reviews for a hotel, in natural storage order
    async fn find_by_hotel(&self, hotel_id: Uuid) -> DomainResult<Vec<Review>>;

    /// Persist a new review
    async fn create(&self, review: Review) -> DomainResult<Review>;

    /// Update an existing review in place
    async fn update(&self, review: Review) -> DomainResult<Review>;

    /// Remove a review; returns false when it did not exist
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
