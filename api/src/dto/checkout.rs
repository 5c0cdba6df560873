//! Checkout DTOs

use serde::Deserialize;
use validator::Validate;

use se_core::services::CheckoutItem;

/// POST /api/v1/payments/checkout
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutBody {
    #[serde(rename = "hotelName")]
    #[validate(length(min = 1, message = "hotelName is required"))]
    pub hotel_name: String,

    #[serde(rename = "pictureUrl")]
    pub picture_url: Option<String>,

    #[serde(rename = "totalAmount")]
    pub total_amount: f64,

    #[serde(rename = "numberOfRooms")]
    pub rooms: u32,

    #[serde(rename = "customerName")]
    #[validate(length(min = 1, message = "customerName is required"))]
    pub customer_name: String,

    #[serde(rename = "customerEmail")]
    #[validate(email(message = "customerEmail must be a valid email"))]
    pub customer_email: String,
}

impl CheckoutBody {
    pub fn item(&self) -> CheckoutItem {
        CheckoutItem {
            hotel_name: self.hotel_name.clone(),
            picture_url: self.picture_url.clone(),
            total_amount: self.total_amount,
            rooms: self.rooms,
        }
    }
}
