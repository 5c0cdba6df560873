//! Hotel review entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A free-text review of a hotel. Reviews are independent records; no
/// average rating is aggregated onto the hotel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: Uuid,

    /// Reviewed hotel
    pub hotel: Uuid,

    /// Authoring user
    pub user: Uuid,

    pub content: String,

    /// Numeric rating, 1 to 5
    pub rating: u8,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(hotel: Uuid, user: Uuid, content: String, rating: u8) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            hotel,
            user,
            content,
            rating,
            created_at: now,
            updated_at: now,
        }
    }
}
