//! User account entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered user account.
///
/// The password hash and the active refresh token are never serialized
/// into API responses. The refresh token column holds at most one value,
/// which gives each account single-session refresh semantics: logging in
/// elsewhere overwrites it and strands the earlier session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Unique username
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Display name
    #[serde(rename = "fullName")]
    pub full_name: String,

    /// Contact phone number
    pub phone: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Public URL of the uploaded profile picture
    #[serde(rename = "profilePicture")]
    pub profile_picture_url: String,

    /// The currently active refresh token, if any
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a freshly generated id and no active session
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        phone: String,
        password_hash: String,
        profile_picture_url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            full_name,
            phone,
            password_hash,
            profile_picture_url,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "traveller".to_string(),
            "traveller@example.com".to_string(),
            "Test Traveller".to_string(),
            "0123456789".to_string(),
            "$2b$12$hash".to_string(),
            "https://cdn.example.com/p.png".to_string(),
        )
    }

    #[test]
    fn new_user_has_no_active_session() {
        let user = sample_user();
        assert!(user.refresh_token.is_none());
    }

    #[test]
    fn secrets_are_not_serialized() {
        let mut user = sample_user();
        user.refresh_token = Some("refresh.jwt.value".to_string());

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("refresh_token").is_none());
        assert_eq!(json["username"], "traveller");
    }
}
