//! Hotel catalogue routes under /api/v1/hotels

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use se_core::repositories::{
    BookingRepository, HotelRepository, ReviewRepository, UserRepository,
};
use se_core::services::{CheckoutProvider, MediaStorage};
use se_shared::types::{ApiResponse, PageQuery};

use crate::dto::hotel::{new_hotel_from_form, UpdateHotelBody};
use crate::handlers::upload::parse_form;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// GET /api/v1/hotels/getAllHotels?page=&limit=
pub async fn list<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let hotels = state.hotels.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(hotels, "Hotels fetched successfully")))
}

/// GET /api/v1/hotels/{hotelId}
pub async fn get<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let hotel = state.hotels.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(hotel, "Hotel fetched successfully")))
}

/// POST /api/v1/hotels/addHotels (auth, multipart)
pub async fn create<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    ctx: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let mut form = parse_form(payload).await?;
    let input = new_hotel_from_form(&mut form)?;
    let picture = form.require_file("picture")?;

    let hotel = state.hotels.create(ctx.user_id, input, picture).await?;
    Ok(HttpResponse::Created().json(ApiResponse::created(hotel, "Hotel added successfully")))
}

/// PATCH /api/v1/hotels/{hotelId} (auth)
///
/// Any authenticated user may update any listing; ownership is not
/// checked.
pub async fn update<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
    _ctx: AuthContext,
    body: web::Json<UpdateHotelBody>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let hotel = state
        .hotels
        .update(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(hotel, "Hotel updated successfully")))
}

/// PATCH /api/v1/hotels/updatedHotelsPicture/{hotelId} (auth, multipart)
pub async fn update_picture<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
    _ctx: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let mut form = parse_form(payload).await?;
    let upload = form.require_file("picture")?;

    let hotel = state.hotels.update_picture(path.into_inner(), upload).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(hotel, "Hotel picture updated successfully")))
}

/// DELETE /api/v1/hotels/{hotelId} (auth)
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
    state.hotels.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({}),
        "Hotel deleted successfully",
    )))
}
