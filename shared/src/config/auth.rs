//! Authentication configuration
//!
//! Access and refresh tokens are signed with distinct secrets so a leaked
//! access secret cannot be used to mint long-lived refresh tokens.

use serde::{Deserialize, Serialize};

use super::{env_or, require_env};

/// JWT signing configuration for the token service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret for signing short-lived access tokens
    pub access_token_secret: String,

    /// Secret for signing long-lived refresh tokens
    pub refresh_token_secret: String,

    /// Access token validity in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token validity in days
    pub refresh_token_expiry_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: "development-access-secret-change-me".to_string(),
            refresh_token_secret: "development-refresh-secret-change-me".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, String> {
        let access_token_expiry_minutes = env_or("ACCESS_TOKEN_EXPIRY_MINUTES", "15")
            .parse::<i64>()
            .map_err(|_| "ACCESS_TOKEN_EXPIRY_MINUTES must be an integer".to_string())?;
        let refresh_token_expiry_days = env_or("REFRESH_TOKEN_EXPIRY_DAYS", "7")
            .parse::<i64>()
            .map_err(|_| "REFRESH_TOKEN_EXPIRY_DAYS must be an integer".to_string())?;

        Ok(Self {
            access_token_secret: require_env("ACCESS_TOKEN_SECRET")?,
            refresh_token_secret: require_env("REFRESH_TOKEN_SECRET")?,
            access_token_expiry_minutes,
            refresh_token_expiry_days,
        })
    }
}
