//! Hotel catalogue service

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::hotel::{Hotel, HotelTag};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::HotelRepository;
use crate::services::media::{FileUpload, MediaStorage};
use se_shared::types::PageQuery;

/// Input for creating a listing
#[derive(Debug, Clone)]
pub struct NewHotel {
    pub name: String,
    pub description: String,
    pub tag: HotelTag,
    pub price: f64,
    pub country: String,
    pub state: String,
    pub location: String,
}

/// Partial update: absent fields keep their current values
#[derive(Debug, Clone, Default)]
pub struct HotelChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tag: Option<HotelTag>,
    pub price: Option<f64>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub location: Option<String>,
}

impl HotelChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.tag.is_none()
            && self.price.is_none()
            && self.country.is_none()
            && self.state.is_none()
            && self.location.is_none()
    }
}

/// CRUD over hotel listings. The listing photo goes through the media
/// storage collaborator; everything else is plain persistence.
pub struct HotelService<H, M>
where
    H: HotelRepository,
    M: MediaStorage,
{
    hotels: Arc<H>,
    media: Arc<M>,
}

impl<H, M> HotelService<H, M>
where
    H: HotelRepository,
    M: MediaStorage,
{
    pub fn new(hotels: Arc<H>, media: Arc<M>) -> Self {
        Self { hotels, media }
    }

    pub async fn list(&self, page: PageQuery) -> DomainResult<Vec<Hotel>> {
        self.hotels.list(page.offset(), page.limit).await
    }

    pub async fn get(&self, hotel_id: Uuid) -> DomainResult<Hotel> {
        self.hotels
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Hotel"))
    }

    /// Creates a listing owned by `owner`, uploading the photo first.
    pub async fn create(
        &self,
        owner: Uuid,
        input: NewHotel,
        picture: FileUpload,
    ) -> DomainResult<Hotel> {
        if input.name.is_empty()
            || input.description.is_empty()
            || input.country.is_empty()
            || input.state.is_empty()
            || input.location.is_empty()
        {
            return Err(DomainError::validation("All fields are required"));
        }
        if !(input.price > 0.0) {
            return Err(DomainError::validation("Price must be positive"));
        }
        if picture.bytes.is_empty() {
            return Err(DomainError::validation("Picture is required"));
        }

        let picture_url = self.media.upload(picture).await?;

        let now = Utc::now();
        let hotel = Hotel {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            tag: input.tag,
            price: input.price,
            country: input.country,
            state: input.state,
            location: input.location,
            picture: picture_url,
            owner,
            created_at: now,
            updated_at: now,
        };

        let created = self.hotels.create(hotel).await?;
        tracing::info!(hotel_id = %created.id, "hotel created");
        Ok(created)
    }

    /// Applies a partial update; at least one field must change.
    pub async fn update(&self, hotel_id: Uuid, changes: HotelChanges) -> DomainResult<Hotel> {
        if changes.is_empty() {
            return Err(DomainError::validation(
                "At least one field is required to update",
            ));
        }
        if let Some(price) = changes.price {
            if !(price > 0.0) {
                return Err(DomainError::validation("Price must be positive"));
            }
        }

        let mut hotel = self.get(hotel_id).await?;
        if let Some(name) = changes.name {
            hotel.name = name;
        }
        if let Some(description) = changes.description {
            hotel.description = description;
        }
        if let Some(tag) = changes.tag {
            hotel.tag = tag;
        }
        if let Some(price) = changes.price {
            hotel.price = price;
        }
        if let Some(country) = changes.country {
            hotel.country = country;
        }
        if let Some(state) = changes.state {
            hotel.state = state;
        }
        if let Some(location) = changes.location {
            hotel.location = location;
        }
        hotel.updated_at = Utc::now();

        self.hotels.update(hotel).await
    }

    /// Replaces the listing photo.
    pub async fn update_picture(&self, hotel_id: Uuid, upload: FileUpload) -> DomainResult<Hotel> {
        if upload.bytes.is_empty() {
            return Err(DomainError::validation("Picture is required"));
        }

        let url = self.media.upload(upload).await?;

        let mut hotel = self.get(hotel_id).await?;
        hotel.picture = url;
        hotel.updated_at = Utc::now();

        self.hotels.update(hotel).await
    }

    pub async fn delete(&self, hotel_id: Uuid) -> DomainResult<()> {
        if !self.hotels.delete(hotel_id).await? {
            return Err(DomainError::not_found("Hotel"));
        }
        tracing::info!(hotel_id = %hotel_id, "hotel deleted");
        Ok(())
    }
}
