//! Token entities for JWT-based authentication

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for JWT payloads.
///
/// Access tokens carry the identity fields so protected endpoints can act
/// without a storage round-trip; refresh tokens carry only the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Username, present on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Email, present on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Issued-at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token id. Guarantees that two tokens minted for the same
    /// subject in the same second are still distinct strings, which the
    /// rotation equality check depends on.
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token valid for `expiry_minutes`
    pub fn new_access(user_id: Uuid, username: &str, email: &str, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(expiry_minutes)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Creates claims for a refresh token valid for `expiry_days`
    pub fn new_refresh(user_id: Uuid, expiry_days: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            username: None,
            email: None,
            iat: now.timestamp(),
            exp: (now + Duration::days(expiry_days)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Access/refresh token pair returned to the client after login or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "accessToken")]
    pub access_token: String,

    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
