//! Configuration for the token service

use se_shared::config::AuthConfig;

/// Signing secrets and validity windows for the token service.
///
/// Access and refresh tokens use distinct secrets; a leaked access secret
/// cannot be used to forge refresh tokens.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Secret for signing refresh tokens
    pub refresh_secret: String,
    /// Access token validity in minutes
    pub access_expiry_minutes: i64,
    /// Refresh token validity in days
    pub refresh_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret-please-change".to_string(),
            refresh_secret: "development-refresh-secret-please-change".to_string(),
            access_expiry_minutes: 15,
            refresh_expiry_days: 7,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            access_secret: config.access_token_secret.clone(),
            refresh_secret: config.refresh_token_secret.clone(),
            access_expiry_minutes: config.access_token_expiry_minutes,
            refresh_expiry_days: config.refresh_token_expiry_days,
        }
    }
}
