//! Hotel review service

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{HotelRepository, ReviewRepository};

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

/// Reviews hang off hotels; every write checks the hotel still exists
/// before touching the review store.
pub struct ReviewService<R, H>
where
    R: ReviewRepository,
    H: HotelRepository,
{
    reviews: Arc<R>,
    hotels: Arc<H>,
}

impl<R, H> ReviewService<R, H>
where
    R: ReviewRepository,
    H: HotelRepository,
{
    pub fn new(reviews: Arc<R>, hotels: Arc<H>) -> Self {
        Self { reviews, hotels }
    }

    pub async fn list_for_hotel(&self, hotel_id: Uuid) -> DomainResult<Vec<Review>> {
        self.require_hotel(hotel_id).await?;
        self.reviews.find_by_hotel(hotel_id).await
    }

    pub async fn add(
        &self,
        hotel_id: Uuid,
        user_id: Uuid,
        content: String,
        rating: u8,
    ) -> DomainResult<Review> {
        Self::validate(&content, rating)?;
        self.require_hotel(hotel_id).await?;

        let review = Review::new(hotel_id, user_id, content, rating);
        let created = self.reviews.create(review).await?;
        tracing::info!(review_id = %created.id, hotel_id = %hotel_id, "review added");
        Ok(created)
    }

    pub async fn update(
        &self,
        hotel_id: Uuid,
        review_id: Uuid,
        content: String,
        rating: u8,
    ) -> DomainResult<Review> {
        Self::validate(&content, rating)?;
        self.require_hotel(hotel_id).await?;

        let mut review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))?;
        if review.hotel != hotel_id {
            return Err(DomainError::not_found("Review"));
        }

        review.content = content;
        review.rating = rating;
        review.updated_at = Utc::now();

        self.reviews.update(review).await
    }

    pub async fn delete(&self, hotel_id: Uuid, review_id: Uuid) -> DomainResult<()> {
        self.require_hotel(hotel_id).await?;

        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))?;
        if review.hotel != hotel_id {
            return Err(DomainError::not_found("Review"));
        }

        if !self.reviews.delete(review_id).await? {
            return Err(DomainError::not_found("Review"));
        }
        tracing::info!(review_id = %review_id, "review deleted");
        Ok(())
    }

    async fn require_hotel(&self, hotel_id: Uuid) -> DomainResult<()> {
        self.hotels
            .find_by_id(hotel_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Hotel"))
    }

    fn validate(content: &str, rating: u8) -> DomainResult<()> {
        if content.is_empty() {
            return Err(DomainError::validation("Review content is required"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(DomainError::validation("Rating must be between 1 and 5"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::hotel::{Hotel, HotelTag};
    use crate::repositories::{MockHotelRepository, MockReviewRepository};

    async fn seeded_hotel(hotels: &MockHotelRepository) -> Uuid {
        let now = Utc::now();
        let hotel = Hotel {
            id: Uuid::new_v4(),
            name: "Seaside Grand".to_string(),
            description: "A hotel by the sea".to_string(),
            tag: HotelTag::FourStar,
            price: 2000.0,
            country: "India".to_string(),
            state: "Goa".to_string(),
            location: "Baga Beach".to_string(),
            picture: "https://cdn.test/h.png".to_string(),
            owner: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };
        let id = hotel.id;
        hotels.insert(hotel).await;
        id
    }

    async fn build_service() -> (
        ReviewService<MockReviewRepository, MockHotelRepository>,
        Uuid,
    ) {
        let hotels = Arc::new(MockHotelRepository::new());
        let hotel_id = seeded_hotel(&hotels).await;
        (
            ReviewService::new(Arc::new(MockReviewRepository::new()), hotels),
            hotel_id,
        )
    }

    #[tokio::test]
    async fn add_and_list_reviews() {
        let (service, hotel_id) = build_service().await;
        let user_id = Uuid::new_v4();

        service
            .add(hotel_id, user_id, "Lovely stay".to_string(), 5)
            .await
            .unwrap();

        let reviews = service.list_for_hotel(hotel_id).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].content, "Lovely stay");
        assert_eq!(reviews[0].rating, 5);
    }

    #[tokio::test]
    async fn rating_outside_one_to_five_is_rejected() {
        let (service, hotel_id) = build_service().await;

        for rating in [0u8, 6] {
            let result = service
                .add(hotel_id, Uuid::new_v4(), "text".to_string(), rating)
                .await;
            assert!(matches!(result, Err(DomainError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn adding_to_unknown_hotel_is_not_found() {
        let (service, _) = build_service().await;

        let result = service
            .add(Uuid::new_v4(), Uuid::new_v4(), "text".to_string(), 3)
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn update_replaces_content_and_rating() {
        let (service, hotel_id) = build_service().await;
        let review = service
            .add(hotel_id, Uuid::new_v4(), "Okay".to_string(), 3)
            .await
            .unwrap();

        let updated = service
            .update(hotel_id, review.id, "Actually great".to_string(), 5)
            .await
            .unwrap();
        assert_eq!(updated.content, "Actually great");
        assert_eq!(updated.rating, 5);
    }

    #[tokio::test]
    async fn update_under_the_wrong_hotel_is_not_found() {
        let (service, hotel_id) = build_service().await;
        let review = service
            .add(hotel_id, Uuid::new_v4(), "Okay".to_string(), 3)
            .await
            .unwrap();

        let result = service
            .update(Uuid::new_v4(), review.id, "text".to_string(), 4)
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_removes_the_review() {
        let (service, hotel_id) = build_service().await;
        let review = service
            .add(hotel_id, Uuid::new_v4(), "Okay".to_string(), 3)
            .await
            .unwrap();

        service.delete(hotel_id, review.id).await.unwrap();
        assert!(service.list_for_hotel(hotel_id).await.unwrap().is_empty());
    }
}
