#[path = "trait.rs"]
mod trait_;

pub use trait_::UserRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockUserRepository;
