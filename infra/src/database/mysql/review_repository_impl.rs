//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::review::Review;
use se_core::errors::{DomainError, DomainResult};
use se_core::repositories::ReviewRepository;

use super::db_error;

const REVIEW_COLUMNS: &str = "id, hotel, user, content, rating, created_at, updated_at";

/// MySQL-backed review store
pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &sqlx::mysql::MySqlRow) -> DomainResult<Review> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to read id: {e}")))?;
        let hotel: String = row
            .try_get("hotel")
            .map_err(|e| DomainError::internal(format!("Failed to read hotel: {e}")))?;
        let user: String = row
            .try_get("user")
            .map_err(|e| DomainError::internal(format!("Failed to read user: {e}")))?;

        Ok(Review {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid review UUID: {e}")))?,
            hotel: Uuid::parse_str(&hotel)
                .map_err(|e| DomainError::internal(format!("Invalid hotel UUID: {e}")))?,
            user: Uuid::parse_str(&user)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {e}")))?,
            content: row
                .try_get("content")
                .map_err(|e| DomainError::internal(format!("Failed to read content: {e}")))?,
            rating: row
                .try_get("rating")
                .map_err(|e| DomainError::internal(format!("Failed to read rating: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to read created_at: {e}")))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to read updated_at: {e}")))?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Review>> {
        let query = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find review", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_review(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_hotel(&self, hotel_id: Uuid) -> DomainResult<Vec<Review>> {
        let query =
            format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE hotel = ? ORDER BY created_at");

        let rows = sqlx::query(&query)
            .bind(hotel_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list reviews", e))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn create(&self, review: Review) -> DomainResult<Review> {
        let query = r#"
            INSERT INTO reviews (
                id, hotel, user, content, rating, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(review.hotel.to_string())
            .bind(review.user.to_string())
            .bind(&review.content)
            .bind(review.rating)
            .bind(review.created_at)
            .bind(review.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create review", e))?;

        Ok(review)
    }

    async fn update(&self, review: Review) -> DomainResult<Review> {
        let query = "UPDATE reviews SET content = ?, rating = ?, updated_at = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(&review.content)
            .bind(review.rating)
            .bind(review.updated_at)
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update review", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Review"));
        }

        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete review", e))?;

        Ok(result.rows_affected() > 0)
    }
}
