//! Repository interfaces for the entity store.
//!
//! Each entity gets an async trait that the infrastructure layer
//! implements against MySQL; the `mock` modules provide in-memory
//! implementations for unit tests.

pub mod booking;
pub mod hotel;
pub mod review;
pub mod user;

pub use booking::BookingRepository;
pub use hotel::HotelRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use booking::MockBookingRepository;
#[cfg(test)]
pub use hotel::MockHotelRepository;
#[cfg(test)]
pub use review::MockReviewRepository;
#[cfg(test)]
pub use user::MockUserRepository;
