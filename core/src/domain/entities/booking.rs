//! Booking entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A confirmed stay at a hotel.
///
/// `hotel_name` is copied from the hotel at creation time. If the hotel is
/// later renamed the copy drifts; that denormalization is intentional so a
/// booking keeps showing the name it was made under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: Uuid,

    /// Referenced hotel
    pub hotel: Uuid,

    /// Hotel name captured at creation time
    #[serde(rename = "hotelName")]
    pub hotel_name: String,

    /// Owning user
    pub user: Uuid,

    #[serde(rename = "checkIn")]
    pub check_in: DateTime<Utc>,

    #[serde(rename = "checkOut")]
    pub check_out: DateTime<Utc>,

    /// Number of rooms booked, always positive
    #[serde(rename = "numberOfRooms")]
    pub rooms: u32,

    /// Computed total for the stay
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new booking record with a freshly generated id
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hotel: Uuid,
        hotel_name: String,
        user: Uuid,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        rooms: u32,
        total_amount: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            hotel,
            hotel_name,
            user,
            check_in,
            check_out,
            rooms,
            total_amount,
            created_at: now,
            updated_at: now,
        }
    }
}
