//! Payment provider configuration

use serde::{Deserialize, Serialize};

use super::{env_or, require_env};

/// Configuration for the external hosted-checkout provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Provider API base URL
    pub api_base: String,

    /// Secret API key, loaded from the environment only
    pub secret_key: String,

    /// ISO currency code used for checkout sessions
    pub currency: String,

    /// URL the provider redirects to after a successful payment
    pub success_url: String,

    /// URL the provider redirects to when the customer cancels
    pub cancel_url: String,
}

impl PaymentConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_base: env_or("PAYMENT_API_BASE", "https://api.stripe.com"),
            secret_key: require_env("PAYMENT_SECRET_KEY")?,
            currency: env_or("PAYMENT_CURRENCY", "inr"),
            success_url: require_env("PAYMENT_SUCCESS_URL")?,
            cancel_url: require_env("PAYMENT_CANCEL_URL")?,
        })
    }
}
