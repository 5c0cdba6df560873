//! Shared utilities and common types for the StayEase server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The API response envelope shared by every endpoint

pub mod config;
pub mod types;

pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, MediaConfig, PaymentConfig, ServerConfig,
};
pub use types::{ApiErrorBody, ApiResponse};
