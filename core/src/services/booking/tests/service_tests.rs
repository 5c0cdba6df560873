//! Unit tests for the booking lifecycle service

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::hotel::{Hotel, HotelTag};
use crate::errors::DomainError;
use crate::repositories::{MockBookingRepository, MockHotelRepository};
use crate::services::booking::{BookingRequest, BookingService};

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn sample_hotel(price: f64) -> Hotel {
    let now = Utc::now();
    Hotel {
        id: Uuid::new_v4(),
        name: "Seaside Grand".to_string(),
        description: "A hotel by the sea".to_string(),
        tag: HotelTag::FourStar,
        price,
        country: "India".to_string(),
        state: "Goa".to_string(),
        location: "Baga Beach".to_string(),
        picture: "https://cdn.test/seaside.png".to_string(),
        owner: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
    }
}

async fn service_with_hotel(
    price: f64,
) -> (
    BookingService<MockHotelRepository, MockBookingRepository>,
    Arc<MockHotelRepository>,
    Uuid,
) {
    let hotels = Arc::new(MockHotelRepository::new());
    let bookings = Arc::new(MockBookingRepository::new());
    let hotel = sample_hotel(price);
    let hotel_id = hotel.id;
    hotels.insert(hotel).await;

    (BookingService::new(hotels.clone(), bookings), hotels, hotel_id)
}

fn request(check_in: DateTime<Utc>, check_out: DateTime<Utc>, rooms: u32) -> BookingRequest {
    BookingRequest {
        check_in,
        check_out,
        rooms,
    }
}

#[tokio::test]
async fn create_computes_total_from_hotel_price() {
    let (service, _, hotel_id) = service_with_hotel(2000.0).await;
    let user_id = Uuid::new_v4();

    let booking = service
        .create(hotel_id, user_id, request(date(2024, 1, 1), date(2024, 1, 3), 2))
        .await
        .unwrap();

    assert_eq!(booking.total_amount, 8000.0);
    assert_eq!(booking.hotel_name, "Seaside Grand");
    assert_eq!(booking.user, user_id);
    assert_eq!(booking.rooms, 2);
}

#[tokio::test]
async fn create_rejects_equal_and_inverted_dates() {
    let (service, _, hotel_id) = service_with_hotel(2000.0).await;
    let user_id = Uuid::new_v4();
    let day = date(2024, 1, 1);

    let equal = service.create(hotel_id, user_id, request(day, day, 1)).await;
    assert!(matches!(equal, Err(DomainError::Validation { .. })));

    let inverted = service
        .create(hotel_id, user_id, request(date(2024, 1, 3), date(2024, 1, 1), 1))
        .await;
    assert!(matches!(inverted, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn create_rejects_zero_rooms() {
    let (service, _, hotel_id) = service_with_hotel(2000.0).await;

    let result = service
        .create(
            hotel_id,
            Uuid::new_v4(),
            request(date(2024, 1, 1), date(2024, 1, 3), 0),
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn create_fails_for_unknown_hotel() {
    let (service, _, _) = service_with_hotel(2000.0).await;

    let result = service
        .create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            request(date(2024, 1, 1), date(2024, 1, 3), 1),
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn update_recomputes_from_current_hotel_price() {
    let (service, hotels, hotel_id) = service_with_hotel(2000.0).await;
    let user_id = Uuid::new_v4();

    let booking = service
        .create(hotel_id, user_id, request(date(2024, 1, 1), date(2024, 1, 3), 2))
        .await
        .unwrap();
    assert_eq!(booking.total_amount, 8000.0);

    // The hotel owner raises the price between create and update; the
    // update must price against the current rate, not the original one.
    hotels.set_price(hotel_id, 3000.0).await;

    service
        .update(booking.id, request(date(2024, 1, 1), date(2024, 1, 3), 2))
        .await
        .unwrap();

    let reread = service.get(booking.id).await.unwrap();
    assert_eq!(reread.total_amount, 12000.0);
}

#[tokio::test]
async fn update_returns_pre_update_snapshot() {
    let (service, _, hotel_id) = service_with_hotel(2000.0).await;
    let user_id = Uuid::new_v4();

    let booking = service
        .create(hotel_id, user_id, request(date(2024, 1, 1), date(2024, 1, 3), 2))
        .await
        .unwrap();

    let snapshot = service
        .update(booking.id, request(date(2024, 1, 1), date(2024, 1, 4), 2))
        .await
        .unwrap();

    // The returned record is the state before the update...
    assert_eq!(snapshot.total_amount, 8000.0);
    assert_eq!(snapshot.check_out, date(2024, 1, 3));

    // ...while a follow-up read sees the new dates and total.
    let reread = service.get(booking.id).await.unwrap();
    assert_eq!(reread.total_amount, 12000.0);
    assert_eq!(reread.check_out, date(2024, 1, 4));
}

#[tokio::test]
async fn update_validates_input_like_create() {
    let (service, _, hotel_id) = service_with_hotel(2000.0).await;

    let booking = service
        .create(
            hotel_id,
            Uuid::new_v4(),
            request(date(2024, 1, 1), date(2024, 1, 3), 1),
        )
        .await
        .unwrap();

    let result = service
        .update(booking.id, request(date(2024, 1, 3), date(2024, 1, 3), 1))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn update_of_missing_booking_is_not_found() {
    let (service, _, _) = service_with_hotel(2000.0).await;

    let result = service
        .update(Uuid::new_v4(), request(date(2024, 1, 1), date(2024, 1, 3), 1))
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (service, _, hotel_id) = service_with_hotel(2000.0).await;

    let booking = service
        .create(
            hotel_id,
            Uuid::new_v4(),
            request(date(2024, 1, 1), date(2024, 1, 3), 1),
        )
        .await
        .unwrap();

    service.delete(booking.id).await.unwrap();

    let result = service.get(booking.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    // Deleting again also reports absence.
    let again = service.delete(booking.id).await;
    assert!(matches!(again, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn list_for_user_only_returns_owned_bookings() {
    let (service, _, hotel_id) = service_with_hotel(1000.0).await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    service
        .create(hotel_id, alice, request(date(2024, 2, 1), date(2024, 2, 3), 1))
        .await
        .unwrap();
    service
        .create(hotel_id, alice, request(date(2024, 3, 1), date(2024, 3, 2), 1))
        .await
        .unwrap();
    service
        .create(hotel_id, bob, request(date(2024, 2, 1), date(2024, 2, 3), 1))
        .await
        .unwrap();

    let alices = service.list_for_user(alice).await.unwrap();
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|b| b.user == alice));
}
