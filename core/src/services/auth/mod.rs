//! Account and authentication service
//!
//! Registration, credential login, logout, and profile mutation. Token
//! issuance and rotation live in the token service; this module owns the
//! password and account rules around them.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, LoginRequest, RegisterRequest};
