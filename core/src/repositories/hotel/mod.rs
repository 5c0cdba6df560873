#[path = "trait.rs"]
mod trait_;

pub use trait_::HotelRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockHotelRepository;
