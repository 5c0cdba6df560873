//! Token service for the JWT lifecycle
//!
//! This module handles all token-related operations:
//! - access token issuance and stateless verification
//! - refresh token issuance, rotation on refresh, and invalidation
//! - persistence of the single active refresh token per user

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
