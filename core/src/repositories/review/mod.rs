#[path = "trait.rs"]
mod trait_;

pub use trait_::ReviewRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockReviewRepository;
