//! StayEase API server binary.
//!
//! Loads configuration from the environment, wires the MySQL
//! repositories and external clients into the core services, and serves
//! the HTTP API.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use se_api::app::create_app;
use se_api::state::AppState;
use se_core::services::{
    AuthService, BookingService, CheckoutService, HotelService, ReviewService, TokenService,
    TokenServiceConfig,
};
use se_infra::{
    create_pool, HttpMediaStorage, MySqlBookingRepository, MySqlHotelRepository,
    MySqlReviewRepository, MySqlUserRepository, StripeCheckout,
};
use se_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(%e, "configuration error");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    tracing::info!(environment = ?config.environment, "starting StayEase API server");

    let pool = create_pool(&config.database).await.map_err(|e| {
        tracing::error!(%e, "database error");
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let hotels_repo = Arc::new(MySqlHotelRepository::new(pool.clone()));
    let bookings_repo = Arc::new(MySqlBookingRepository::new(pool.clone()));
    let reviews_repo = Arc::new(MySqlReviewRepository::new(pool));

    let media = Arc::new(
        HttpMediaStorage::new(config.media.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
    );
    let provider = Arc::new(
        StripeCheckout::new(config.payment.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
    );

    let tokens = Arc::new(TokenService::new(
        users.clone(),
        TokenServiceConfig::from(&config.auth),
    ));
    let auth = Arc::new(AuthService::new(users, media.clone(), tokens.clone()));
    let hotels = Arc::new(HotelService::new(hotels_repo.clone(), media));
    let bookings = Arc::new(BookingService::new(hotels_repo.clone(), bookings_repo));
    let reviews = Arc::new(ReviewService::new(reviews_repo, hotels_repo));
    let checkout = Arc::new(CheckoutService::new(
        provider,
        config.payment.currency.clone(),
    ));

    let state = web::Data::new(AppState {
        auth,
        tokens,
        hotels,
        bookings,
        reviews,
        checkout,
    });

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "server listening");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
