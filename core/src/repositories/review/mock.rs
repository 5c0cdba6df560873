//! Mock implementation of ReviewRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, DomainResult};

use super::trait_::ReviewRepository;

/// In-memory review repository for unit tests
#[derive(Default)]
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl MockReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Review>> {
        Ok(self.reviews.read().await.get(&id).cloned())
    }

    async fn find_by_hotel(&self, hotel_id: Uuid) -> DomainResult<Vec<Review>> {
        let reviews = self.reviews.read().await;
        let mut matching: Vec<Review> = reviews
            .values()
            .filter(|r| r.hotel == hotel_id)
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.created_at);
        Ok(matching)
    }

    async fn create(&self, review: Review) -> DomainResult<Review> {
        self.reviews.write().await.insert(review.id, review.clone());
        Ok(review)
    }

    async fn update(&self, review: Review) -> DomainResult<Review> {
        let mut reviews = self.reviews.write().await;

        if !reviews.contains_key(&review.id) {
            return Err(DomainError::not_found("Review"));
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.reviews.write().await.remove(&id).is_some())
    }
}
