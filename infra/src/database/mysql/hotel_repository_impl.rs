//! MySQL implementation of the HotelRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::hotel::Hotel;
use se_core::errors::{DomainError, DomainResult};
use se_core::repositories::HotelRepository;

use super::db_error;

const HOTEL_COLUMNS: &str = "id, name, description, tag, price, country, state, \
     location, picture, owner, created_at, updated_at";

/// MySQL-backed hotel store. The star tag is stored as its display
/// string ("5 star" .. "1 star").
pub struct MySqlHotelRepository {
    pool: MySqlPool,
}

impl MySqlHotelRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_hotel(row: &sqlx::mysql::MySqlRow) -> DomainResult<Hotel> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to read id: {e}")))?;
        let owner: String = row
            .try_get("owner")
            .map_err(|e| DomainError::internal(format!("Failed to read owner: {e}")))?;
        let tag: String = row
            .try_get("tag")
            .map_err(|e| DomainError::internal(format!("Failed to read tag: {e}")))?;

        Ok(Hotel {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid hotel UUID: {e}")))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to read name: {e}")))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::internal(format!("Failed to read description: {e}")))?,
            tag: tag.parse()?,
            price: row
                .try_get("price")
                .map_err(|e| DomainError::internal(format!("Failed to read price: {e}")))?,
            country: row
                .try_get("country")
                .map_err(|e| DomainError::internal(format!("Failed to read country: {e}")))?,
            state: row
                .try_get("state")
                .map_err(|e| DomainError::internal(format!("Failed to read state: {e}")))?,
            location: row
                .try_get("location")
                .map_err(|e| DomainError::internal(format!("Failed to read location: {e}")))?,
            picture: row
                .try_get("picture")
                .map_err(|e| DomainError::internal(format!("Failed to read picture: {e}")))?,
            owner: Uuid::parse_str(&owner)
                .map_err(|e| DomainError::internal(format!("Invalid owner UUID: {e}")))?,
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
impl HotelRepository for MySqlHotelRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Hotel>> {
        let query = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find hotel", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_hotel(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, offset: u64, limit: u32) -> DomainResult<Vec<Hotel>> {
        let query =
            format!("SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY created_at LIMIT ? OFFSET ?");

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list hotels", e))?;

        rows.iter().map(Self::row_to_hotel).collect()
    }

    async fn create(&self, hotel: Hotel) -> DomainResult<Hotel> {
        let query = r#"
            INSERT INTO hotels (
                id, name, description, tag, price, country, state,
                location, picture, owner, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(hotel.id.to_string())
            .bind(&hotel.name)
            .bind(&hotel.description)
            .bind(hotel.tag.as_str())
            .bind(hotel.price)
            .bind(&hotel.country)
            .bind(&hotel.state)
            .bind(&hotel.location)
            .bind(&hotel.picture)
            .bind(hotel.owner.to_string())
            .bind(hotel.created_at)
            .bind(hotel.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create hotel", e))?;

        Ok(hotel)
    }

    async fn update(&self, hotel: Hotel) -> DomainResult<Hotel> {
        let query = r#"
            UPDATE hotels SET
                name = ?, description = ?, tag = ?, price = ?, country = ?,
                state = ?, location = ?, picture = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&hotel.name)
            .bind(&hotel.description)
            .bind(hotel.tag.as_str())
            .bind(hotel.price)
            .bind(&hotel.country)
            .bind(&hotel.state)
            .bind(&hotel.location)
            .bind(&hotel.picture)
            .bind(hotel.updated_at)
            .bind(hotel.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update hotel", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Hotel"));
        }

        Ok(hotel)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete hotel", e))?;

        Ok(result.rows_affected() > 0)
    }
}
