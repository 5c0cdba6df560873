//! Shared application state.
//!
//! Holds every service behind `Arc`, generic over the repository and
//! provider traits so the same wiring serves production and tests.

use std::sync::Arc;

use se_core::repositories::{
    BookingRepository, HotelRepository, ReviewRepository, UserRepository,
};
use se_core::services::{
    AuthService, BookingService, CheckoutProvider, CheckoutService, HotelService, MediaStorage,
    ReviewService, TokenService,
};

/// Application state injected into every handler
pub struct AppState<U, H, B, R, M, P>
where
    U: UserRepository,
    H: HotelRepository,
    B: BookingRepository,
    R: ReviewRepository,
    M: MediaStorage,
    P: CheckoutProvider,
{
    pub auth: Arc<AuthService<U, M>>,
    pub tokens: Arc<TokenService<U>>,
    pub hotels: Arc<HotelService<H, M>>,
    pub bookings: Arc<BookingService<H, B>>,
    pub reviews: Arc<ReviewService<R, H>>,
    pub checkout: Arc<CheckoutService<P>>,
}
