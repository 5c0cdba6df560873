//! Application factory.
//!
//! Builds the actix-web app from an `AppState`, wiring every route with
//! its middleware. Generic over the repository and provider traits rather
//! than tied to the MySQL implementations.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use se_core::repositories::{
    BookingRepository, HotelRepository, ReviewRepository, UserRepository,
};
use se_core::services::{CheckoutProvider, MediaStorage};
use se_shared::types::ApiErrorBody;

use crate::middleware::auth::AccessTokenVerifier;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{bookings, hotels, payments, reviews, users};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, H, B, R, M, P>(
    app_state: web::Data<AppState<U, H, B, R, M, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let verifier: Arc<dyn AccessTokenVerifier> = app_state.tokens.clone();
    let jwt = move || JwtAuth::new(Arc::clone(&verifier));

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("/register", web::post().to(users::register::<U, H, B, R, M, P>))
                        .route("/login", web::post().to(users::login::<U, H, B, R, M, P>))
                        .route(
                            "/logout",
                            web::post().to(users::logout::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/refreshAccessToken",
                            web::post().to(users::refresh_access_token::<U, H, B, R, M, P>),
                        )
                        .route(
                            "/changeCurrentPassword",
                            web::patch()
                                .to(users::change_password::<U, H, B, R, M, P>)
                                .wrap(jwt()),
                        )
                        .route(
                            "/changeFullnamePhoneNumber",
                            web::patch()
                                .to(users::change_profile::<U, H, B, R, M, P>)
                                .wrap(jwt()),
                        )
                        .route(
                            "/changeProfilePicture",
                            web::patch()
                                .to(users::change_picture::<U, H, B, R, M, P>)
                                .wrap(jwt()),
                        )
                        .route(
                            "/getUserProfile/{username}",
                            web::get()
                                .to(users::user_profile::<U, H, B, R, M, P>)
                                .wrap(jwt()),
                        )
                        .route(
                            "",
                            web::get()
                                .to(users::current_user::<U, H, B, R, M, P>)
                                .wrap(jwt()),
                        )
                        .route("/{userId}", web::get().to(users::user_by_id::<U, H, B, R, M, P>)),
                )
                .service(
                    web::scope("/hotels")
                        .route(
                            "/getAllHotels",
                            web::get().to(hotels::list::<U, H, B, R, M, P>),
                        )
                        .route(
                            "/addHotels",
                            web::post().to(hotels::create::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/updatedHotelsPicture/{hotelId}",
                            web::patch()
                                .to(hotels::update_picture::<U, H, B, R, M, P>)
                                .wrap(jwt()),
                        )
                        .route("/{hotelId}", web::get().to(hotels::get::<U, H, B, R, M, P>))
                        .route(
                            "/{hotelId}",
                            web::patch().to(hotels::update::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/{hotelId}",
                            web::delete().to(hotels::delete::<U, H, B, R, M, P>).wrap(jwt()),
                        ),
                )
                .service(
                    web::scope("/bookings")
                        .route(
                            "/allBookings",
                            web::get().to(bookings::list::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/{hotelId}",
                            web::post().to(bookings::create::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/{bookingId}",
                            web::get().to(bookings::get::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/{bookingId}",
                            web::patch().to(bookings::update::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/{bookingId}",
                            web::delete().to(bookings::delete::<U, H, B, R, M, P>).wrap(jwt()),
                        ),
                )
                .service(
                    web::scope("/reviews")
                        .route(
                            "/{hotelId}/{reviewId}",
                            web::patch().to(reviews::update::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route(
                            "/{hotelId}/{reviewId}",
                            web::delete().to(reviews::delete::<U, H, B, R, M, P>).wrap(jwt()),
                        )
                        .route("/{hotelId}", web::get().to(reviews::list::<U, H, B, R, M, P>))
                        .route(
                            "/{hotelId}",
                            web::post().to(reviews::add::<U, H, B, R, M, P>).wrap(jwt()),
                        ),
                )
                .service(
                    web::scope("/payments")
                        .route("/checkout", web::post().to(payments::checkout::<U, H, B, R, M, P>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "stayease-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorBody::new(
        404,
        "The requested resource was not found",
    ))
}
