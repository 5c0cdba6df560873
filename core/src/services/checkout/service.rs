//! Checkout service implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};

/// Booking snapshot handed to checkout. Amounts are in major currency
/// units, matching what the booking service computed.
#[derive(Debug, Clone)]
pub struct CheckoutItem {
    pub hotel_name: String,
    pub picture_url: Option<String>,
    pub total_amount: f64,
    pub rooms: u32,
}

/// Provider-facing session request. `amount_minor` is in the smallest
/// currency unit (paise, cents).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    pub amount_minor: i64,
    pub currency: String,
    pub product_name: String,
    pub product_image: Option<String>,
    pub quantity: u32,
    pub customer_name: String,
    pub customer_email: String,
}

/// Hosted checkout session creation. Implemented against a real payment
/// gateway in the infra crate.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Creates a session and returns its opaque id.
    async fn create_session(&self, request: SessionRequest) -> DomainResult<String>;
}

/// Validates the snapshot, converts the amount to minor units, and hands
/// the session off to the provider.
pub struct CheckoutService<P>
where
    P: CheckoutProvider,
{
    provider: Arc<P>,
    currency: String,
}

impl<P> CheckoutService<P>
where
    P: CheckoutProvider,
{
    pub fn new(provider: Arc<P>, currency: String) -> Self {
        Self { provider, currency }
    }

    pub async fn create_intent(
        &self,
        item: CheckoutItem,
        customer_name: &str,
        customer_email: &str,
    ) -> DomainResult<String> {
        if item.hotel_name.is_empty() {
            return Err(DomainError::validation("Hotel name is required"));
        }
        if !(item.total_amount > 0.0) {
            return Err(DomainError::validation("Amount must be positive"));
        }
        if item.rooms == 0 {
            return Err(DomainError::validation("Number of rooms must be positive"));
        }
        if customer_name.is_empty() || customer_email.is_empty() {
            return Err(DomainError::validation(
                "Customer name and email are required",
            ));
        }

        let amount_minor = (item.total_amount * 100.0).round() as i64;

        let request = SessionRequest {
            amount_minor,
            currency: self.currency.clone(),
            product_name: item.hotel_name,
            product_image: item.picture_url,
            quantity: item.rooms,
            customer_name: customer_name.to_string(),
            customer_email: customer_email.to_string(),
        };

        let session_id = self.provider.create_session(request).await?;
        tracing::info!(session_id = %session_id, "checkout session created");
        Ok(session_id)
    }
}
