//! Route handlers grouped by resource

pub mod bookings;
pub mod hotels;
pub mod payments;
pub mod reviews;
pub mod users;
