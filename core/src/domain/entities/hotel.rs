//! Hotel listing entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Star-rating tag attached to every hotel listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HotelTag {
    #[serde(rename = "5 star")]
    FiveStar,
    #[serde(rename = "4 star")]
    FourStar,
    #[serde(rename = "3 star")]
    ThreeStar,
    #[serde(rename = "2 star")]
    TwoStar,
    #[serde(rename = "1 star")]
    OneStar,
}

impl HotelTag {
    /// Database/display representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelTag::FiveStar => "5 star",
            HotelTag::FourStar => "4 star",
            HotelTag::ThreeStar => "3 star",
            HotelTag::TwoStar => "2 star",
            HotelTag::OneStar => "1 star",
        }
    }
}

impl std::str::FromStr for HotelTag {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "5 star" => Ok(HotelTag::FiveStar),
            "4 star" => Ok(HotelTag::FourStar),
            "3 star" => Ok(HotelTag::ThreeStar),
            "2 star" => Ok(HotelTag::TwoStar),
            "1 star" => Ok(HotelTag::OneStar),
            other => Err(DomainError::validation(format!(
                "Invalid hotel tag: {other}"
            ))),
        }
    }
}

/// A hotel listing owned by the user who created it. The nightly price is
/// the read-only input to the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    pub id: Uuid,

    pub name: String,

    pub description: String,

    /// Star-rating tag from the fixed enumeration
    pub tag: HotelTag,

    /// Price per night per room, always positive
    pub price: f64,

    pub country: String,

    pub state: String,

    pub location: String,

    /// Public URL of the listing photo
    pub picture: String,

    /// Owning user
    pub owner: Uuid,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tag_round_trips_through_str() {
        for tag in [
            HotelTag::FiveStar,
            HotelTag::FourStar,
            HotelTag::ThreeStar,
            HotelTag::TwoStar,
            HotelTag::OneStar,
        ] {
            assert_eq!(HotelTag::from_str(tag.as_str()).unwrap(), tag);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(HotelTag::from_str("6 star").is_err());
        assert!(HotelTag::from_str("five star").is_err());
    }

    #[test]
    fn tag_serializes_as_display_string() {
        let json = serde_json::to_string(&HotelTag::FiveStar).unwrap();
        assert_eq!(json, "\"5 star\"");
    }
}
