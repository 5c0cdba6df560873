//! Hotel DTOs.
//!
//! Creation arrives as multipart form data (text fields plus the picture);
//! updates arrive as JSON with every field optional.

use serde::Deserialize;

use se_core::domain::entities::hotel::HotelTag;
use se_core::services::{HotelChanges, NewHotel};

use crate::handlers::upload::UploadForm;
use crate::handlers::ApiError;

/// Builds the domain input from the multipart fields of
/// POST /api/v1/hotels/addHotels.
pub fn new_hotel_from_form(form: &mut UploadForm) -> Result<NewHotel, ApiError> {
    let tag: HotelTag = form
        .require_field("tag")?
        .parse()
        .map_err(ApiError::from)?;
    let price = form
        .require_field("price")?
        .parse::<f64>()
        .map_err(|_| ApiError::validation("price must be a number"))?;

    Ok(NewHotel {
        name: form.require_field("name")?,
        description: form.require_field("description")?,
        tag,
        price,
        country: form.require_field("country")?,
        state: form.require_field("state")?,
        location: form.require_field("location")?,
    })
}

/// PATCH /api/v1/hotels/{hotelId}
#[derive(Debug, Deserialize, Default)]
pub struct UpdateHotelBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tag: Option<HotelTag>,
    pub price: Option<f64>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateHotelBody> for HotelChanges {
    fn from(body: UpdateHotelBody) -> Self {
        HotelChanges {
            name: body.name,
            description: body.description,
            tag: body.tag,
            price: body.price,
            country: body.country,
            state: body.state,
            location: body.location,
        }
    }
}
