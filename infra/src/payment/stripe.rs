//! Stripe hosted-checkout client.
//!
//! Creates checkout sessions through the `/v1/checkout/sessions` endpoint
//! using the form-encoded API. Card-class failures are distinguished from
//! provider outages so the HTTP layer can map them to different statuses.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use se_core::errors::{DomainError, DomainResult};
use se_core::services::{CheckoutProvider, SessionRequest};
use se_shared::config::payment::PaymentConfig;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Stripe checkout session client
pub struct StripeCheckout {
    client: reqwest::Client,
    config: PaymentConfig,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
}

impl StripeCheckout {
    pub fn new(config: PaymentConfig) -> DomainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn classify_failure(status: reqwest::StatusCode, body: &str) -> DomainError {
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            let message = parsed
                .error
                .message
                .unwrap_or_else(|| "Payment failed".to_string());
            if parsed.error.error_type.as_deref() == Some("card_error") {
                return DomainError::card_declined(message);
            }
            if status.is_client_error() {
                return DomainError::payment_provider(message);
            }
        }
        DomainError::payment_provider(format!("Payment provider returned {status}"))
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_session(&self, request: SessionRequest) -> DomainResult<String> {
        let amount = request.amount_minor.to_string();
        let quantity = request.quantity.to_string();

        let mut form: Vec<(&str, &str)> = vec![
            ("mode", "payment"),
            ("success_url", self.config.success_url.as_str()),
            ("cancel_url", self.config.cancel_url.as_str()),
            ("customer_email", request.customer_email.as_str()),
            ("metadata[customer_name]", request.customer_name.as_str()),
            (
                "line_items[0][price_data][currency]",
                request.currency.as_str(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                request.product_name.as_str(),
            ),
            ("line_items[0][price_data][unit_amount]", amount.as_str()),
            ("line_items[0][quantity]", quantity.as_str()),
        ];
        if let Some(image) = request.product_image.as_deref() {
            form.push(("line_items[0][price_data][product_data][images][0]", image));
        }

        let url = format!("{}/v1/checkout/sessions", self.config.api_base);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%e, "checkout session request failed");
                DomainError::payment_provider("Payment provider unreachable")
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "checkout session rejected");
            return Err(Self::classify_failure(status, &body));
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::payment_provider(format!("Malformed provider reply: {e}")))?;

        tracing::info!(session_id = %session.id, "checkout session created");
        Ok(session.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_errors_are_classified_as_declined() {
        let body = r#"{"error":{"type":"card_error","message":"Your card was declined."}}"#;
        let error = StripeCheckout::classify_failure(reqwest::StatusCode::PAYMENT_REQUIRED, body);
        assert!(matches!(
            error,
            DomainError::Payment {
                kind: se_core::errors::PaymentErrorKind::CardDeclined,
                ..
            }
        ));
    }

    #[test]
    fn other_errors_are_classified_as_provider_failures() {
        let body = r#"{"error":{"type":"api_error","message":"Something went wrong."}}"#;
        let error =
            StripeCheckout::classify_failure(reqwest::StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(
            error,
            DomainError::Payment {
                kind: se_core::errors::PaymentErrorKind::Provider,
                ..
            }
        ));
    }

    #[test]
    fn unparseable_bodies_fall_back_to_provider_failures() {
        let error = StripeCheckout::classify_failure(reqwest::StatusCode::BAD_GATEWAY, "html soup");
        assert!(matches!(
            error,
            DomainError::Payment {
                kind: se_core::errors::PaymentErrorKind::Provider,
                ..
            }
        ));
    }
}
