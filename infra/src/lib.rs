//! # Infrastructure Layer
//!
//! Concrete implementations behind the core crate's traits: MySQL
//! repositories over SQLx, the hosted-checkout payment client, and the
//! media upload client, both over reqwest.

pub mod database;
pub mod media;
pub mod payment;

pub use database::connection::create_pool;
pub use database::mysql::{
    MySqlBookingRepository, MySqlHotelRepository, MySqlReviewRepository, MySqlUserRepository,
};
pub use media::HttpMediaStorage;
pub use payment::StripeCheckout;
