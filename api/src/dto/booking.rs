//! Booking DTOs

use serde::Deserialize;
use validator::Validate;

use se_core::services::BookingRequest;

use super::parse_date;
use crate::handlers::ApiError;

/// POST /api/v1/bookings/{hotelId} and PATCH /api/v1/bookings/{bookingId}
#[derive(Debug, Deserialize, Validate)]
pub struct BookingBody {
    #[serde(rename = "checkIn")]
    #[validate(length(min = 1, message = "checkIn is required"))]
    pub check_in: String,

    #[serde(rename = "checkOut")]
    #[validate(length(min = 1, message = "checkOut is required"))]
    pub check_out: String,

    #[serde(rename = "numberOfRooms")]
    pub rooms: u32,
}

impl BookingBody {
    /// Parses the wire dates into the domain request.
    pub fn into_request(self) -> Result<BookingRequest, ApiError> {
        Ok(BookingRequest {
            check_in: parse_date("checkIn", &self.check_in)?,
            check_out: parse_date("checkOut", &self.check_out)?,
            rooms: self.rooms,
        })
    }
}
