//! Request handling helpers shared across routes

pub mod error;
pub mod upload;

pub use error::ApiError;
