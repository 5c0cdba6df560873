//! Business services
//!
//! Services own the business rules and orchestrate the repositories and
//! external collaborators. Each service is generic over the repository
//! traits it needs, so tests can run against the in-memory mocks.

pub mod auth;
pub mod booking;
pub mod checkout;
pub mod hotel;
pub mod media;
pub mod pricing;
pub mod review;
pub mod token;

pub use auth::AuthService;
pub use booking::{BookingRequest, BookingService};
pub use checkout::{CheckoutItem, CheckoutProvider, CheckoutService, SessionRequest};
pub use hotel::{HotelChanges, HotelService, NewHotel};
pub use media::{FileUpload, MediaStorage};
pub use review::ReviewService;
pub use token::{TokenService, TokenServiceConfig};
