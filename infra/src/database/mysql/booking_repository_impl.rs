//! MySQL implementation of the BookingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::booking::Booking;
use se_core::errors::{DomainError, DomainResult};
use se_core::repositories::BookingRepository;

use super::db_error;

const BOOKING_COLUMNS: &str = "id, hotel, hotel_name, user, check_in, check_out, \
     rooms, total_amount, created_at, updated_at";

/// MySQL-backed booking store. The hotel name is denormalized onto the
/// row at creation time and never re-synced afterwards.
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> DomainResult<Booking> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to read id: {e}")))?;
        let hotel: String = row
            .try_get("hotel")
            .map_err(|e| DomainError::internal(format!("Failed to read hotel: {e}")))?;
        let user: String = row
            .try_get("user")
            .map_err(|e| DomainError::internal(format!("Failed to read user: {e}")))?;

        Ok(Booking {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid booking UUID: {e}")))?,
            hotel: Uuid::parse_str(&hotel)
                .map_err(|e| DomainError::internal(format!("Invalid hotel UUID: {e}")))?,
            hotel_name: row
                .try_get("hotel_name")
                .map_err(|e| DomainError::internal(format!("Failed to read hotel_name: {e}")))?,
            user: Uuid::parse_str(&user)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {e}")))?,
            check_in: row
                .try_get::<DateTime<Utc>, _>("check_in")
                .map_err(|e| DomainError::internal(format!("Failed to read check_in: {e}")))?,
            check_out: row
                .try_get::<DateTime<Utc>, _>("check_out")
                .map_err(|e| DomainError::internal(format!("Failed to read check_out: {e}")))?,
            rooms: row
                .try_get("rooms")
                .map_err(|e| DomainError::internal(format!("Failed to read rooms: {e}")))?,
            total_amount: row
                .try_get("total_amount")
                .map_err(|e| DomainError::internal(format!("Failed to read total_amount: {e}")))?,
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
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        let query = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find booking", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Booking>> {
        let query =
            format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE user = ? ORDER BY created_at");

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list bookings", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn create(&self, booking: Booking) -> DomainResult<Booking> {
        let query = r#"
            INSERT INTO bookings (
                id, hotel, hotel_name, user, check_in, check_out,
                rooms, total_amount, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.hotel.to_string())
            .bind(&booking.hotel_name)
            .bind(booking.user.to_string())
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(booking.rooms)
            .bind(booking.total_amount)
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create booking", e))?;

        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        let query = r#"
            UPDATE bookings SET
                check_in = ?, check_out = ?, rooms = ?, total_amount = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(booking.rooms)
            .bind(booking.total_amount)
            .bind(booking.updated_at)
            .bind(booking.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update booking", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }

        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete booking", e))?;

        Ok(result.rows_affected() > 0)
    }
}
