#[path = "trait.rs"]
mod trait_;

pub use trait_::BookingRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockBookingRepository;
