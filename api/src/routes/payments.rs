//! Payment routes under /api/v1/payments

use actix_web::{web, HttpResponse};

use se_core::repositories::{
    BookingRepository, HotelRepository, ReviewRepository, UserRepository,
};
use se_core::services::{CheckoutProvider, MediaStorage};
use se_shared::types::ApiResponse;

use crate::dto::checkout::CheckoutBody;
use crate::dto::validate_body;
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /api/v1/payments/checkout
pub async fn checkout<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    body: web::Json<CheckoutBody>,
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

    let session_id = state
        .checkout
        .create_intent(body.item(), &body.customer_name, &body.customer_email)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({ "id": session_id }),
        "Checkout session created",
    )))
}
