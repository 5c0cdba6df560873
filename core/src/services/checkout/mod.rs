//! Checkout bridge
//!
//! Turns a booking into a hosted payment session with an external
//! provider. The provider itself sits behind a trait so the core stays
//! free of HTTP concerns.

mod service;


pub use service::{CheckoutItem, CheckoutProvider, CheckoutService, SessionRequest};
