//! Payment provider clients

mod stripe;

pub use stripe::StripeCheckout;
