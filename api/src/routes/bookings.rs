//! Booking routes under /api/v1/bookings

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use se_core::repositories::{
    BookingRepository, HotelRepository, ReviewRepository, UserRepository,
};
use se_core::services::{CheckoutProvider, MediaStorage};
use se_shared::types::ApiResponse;

use crate::dto::booking::BookingBody;
use crate::dto::validate_body;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// POST /api/v1/bookings/{hotelId} (auth)
pub async fn create<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
    ctx: AuthContext,
    body: web::Json<BookingBody>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let body = body.into_inner();
    validate_body(&body)?;
    let request = body.into_request()?;

    let booking = state
        .bookings
        .create(path.into_inner(), ctx.user_id, request)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::created(booking, "Booking created successfully")))
}

/// GET /api/v1/bookings/allBookings (auth)
pub async fn list<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    ctx: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let bookings = state.bookings.list_for_user(ctx.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(bookings, "Bookings fetched successfully")))
}

/// GET /api/v1/bookings/{bookingId} (auth)
///
/// Any authenticated caller holding the identifier may read the booking.
pub async fn get<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
    _ctx: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let booking = state.bookings.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(booking, "Booking fetched successfully")))
}

/// PATCH /api/v1/bookings/{bookingId} (auth)
///
/// Returns the booking as it was before the update.
pub async fn update<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
    _ctx: AuthContext,
    body: web::Json<BookingBody>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let body = body.into_inner();
    validate_body(&body)?;
    let request = body.into_request()?;

    let booking = state.bookings.update(path.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(booking, "Booking updated successfully")))
}

/// DELETE /api/v1/bookings/{bookingId} (auth)
pub async fn delete<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
    _ctx: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    state.bookings.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({}),
        "Booking cancelled successfully",
    )))
}
