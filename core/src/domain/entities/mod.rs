//! Domain entities persisted by the entity store

pub mod booking;
pub mod hotel;
pub mod review;
pub mod token;
pub mod user;

pub use booking::Booking;
pub use hotel::{Hotel, HotelTag};
pub use review::Review;
pub use token::{Claims, TokenPair};
pub use user::User;
