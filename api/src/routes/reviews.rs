//! Review routes under /api/v1/reviews

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use se_core::repositories::{
    BookingRepository, HotelRepository, ReviewRepository, UserRepository,
};
use se_core::services::{CheckoutProvider, MediaStorage};
use se_shared::types::ApiResponse;

use crate::dto::review::ReviewBody;
use crate::dto::validate_body;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// GET /api/v1/reviews/{hotelId}
pub async fn list<U, H, B, R, M, P>(
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
    let reviews = state.reviews.list_for_hotel(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(reviews, "Reviews fetched successfully")))
}

/// POST /api/v1/reviews/{hotelId} (auth)
pub async fn add<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
    ctx: AuthContext,
    body: web::Json<ReviewBody>,
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

    let review = state
        .reviews
        .add(path.into_inner(), ctx.user_id, body.content, body.rating)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::created(review, "Review added successfully")))
}

/// PATCH /api/v1/reviews/{hotelId}/{reviewId} (auth)
pub async fn update<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<(Uuid, Uuid)>,
    _ctx: AuthContext,
    body: web::Json<ReviewBody>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let (hotel_id, review_id) = path.into_inner();
    let body = body.into_inner();
    validate_body(&body)?;

    let review = state
        .reviews
        .update(hotel_id, review_id, body.content, body.rating)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(review, "Review updated successfully")))
}

/// DELETE /api/v1/reviews/{hotelId}/{reviewId} (auth)
pub async fn delete<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<(Uuid, Uuid)>,
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
    let (hotel_id, review_id) = path.into_inner();
    state.reviews.delete(hotel_id, review_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({}),
        "Review deleted successfully",
    )))
}
