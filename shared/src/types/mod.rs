//! Common type definitions

pub mod pagination;
pub mod response;

pub use pagination::PageQuery;
pub use response::{ApiErrorBody, ApiResponse};
