//! # HTTP API Layer
//!
//! The actix-web surface of the StayEase backend: routes, DTOs, the JWT
//! middleware, multipart upload handling, and the domain-error to HTTP
//! status mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
