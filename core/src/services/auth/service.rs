//! Account service implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::media::{FileUpload, MediaStorage};
use crate::services::token::TokenService;

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum accepted phone number length at registration
const MIN_PHONE_LENGTH: usize = 10;

/// Validated registration input. The profile picture is mandatory.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub password: String,
    pub profile_picture: FileUpload,
}

/// Login input: either username or email plus the password
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Service owning account registration, credential checks, and profile
/// mutation. Collaborators are injected at construction; nothing here
/// reaches for ambient singletons.
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: MediaStorage,
{
    users: Arc<U>,
    media: Arc<M>,
    tokens: Arc<TokenService<U>>,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: MediaStorage,
{
    pub fn new(users: Arc<U>, media: Arc<M>, tokens: Arc<TokenService<U>>) -> Self {
        Self {
            users,
            media,
            tokens,
        }
    }

    /// Registers a new account.
    ///
    /// Validates every field, refuses duplicate usernames/emails, uploads
    /// the profile picture, and stores a bcrypt hash of the password.
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<User> {
        if request.username.is_empty()
            || request.email.is_empty()
            || request.full_name.is_empty()
            || request.phone.is_empty()
            || request.password.is_empty()
        {
            return Err(DomainError::validation("All fields are required"));
        }
        if request.password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password should be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }
        if !request.email.contains('@') {
            return Err(DomainError::validation("Email should be valid"));
        }
        if request.phone.len() < MIN_PHONE_LENGTH {
            return Err(DomainError::validation("Phone number should be valid"));
        }

        if self
            .users
            .find_by_username(&request.username)
            .await?
            .is_some()
            || self.users.find_by_email(&request.email).await?.is_some()
        {
            return Err(DomainError::conflict(
                "User with username or email already exists",
            ));
        }
        if request.profile_picture.bytes.is_empty() {
            return Err(DomainError::validation("Profile picture is required"));
        }

        let picture_url = self.media.upload(request.profile_picture).await?;

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|_| DomainError::internal("Failed to hash password"))?;

        let user = User::new(
            request.username,
            request.email,
            request.full_name,
            request.phone,
            password_hash,
            picture_url,
        );

        let created = self.users.create(user).await?;
        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    /// Verifies credentials and issues a token pair.
    pub async fn login(&self, request: LoginRequest) -> DomainResult<(User, TokenPair)> {
        let username = request.username.as_deref().unwrap_or("");
        let email = request.email.as_deref().unwrap_or("");

        if username.is_empty() && email.is_empty() {
            return Err(DomainError::validation("Username or email is required"));
        }
        if request.password.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }

        let user = if !username.is_empty() {
            self.users.find_by_username(username).await?
        } else {
            self.users.find_by_email(email).await?
        }
        .ok_or_else(|| DomainError::not_found("User"))?;

        let verified = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|_| DomainError::internal("Failed to verify password"))?;
        if !verified {
            return Err(DomainError::auth("Password is incorrect"));
        }

        let pair = self.tokens.issue_pair(&user).await?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok((user, pair))
    }

    /// Clears the stored refresh token, ending the user's session.
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.tokens.invalidate(user_id).await?;
        tracing::info!(user_id = %user_id, "user logged out");
        Ok(())
    }

    /// Returns a user by id.
    pub async fn user_by_id(&self, user_id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Returns a user by username.
    pub async fn profile_by_username(&self, username: &str) -> DomainResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Changes the password after re-verifying the current one.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<User> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(DomainError::validation("All fields are required"));
        }

        let mut user = self.user_by_id(user_id).await?;

        let verified = bcrypt::verify(current_password, &user.password_hash)
            .map_err(|_| DomainError::internal("Failed to verify password"))?;
        if !verified {
            return Err(DomainError::auth("Current password is incorrect"));
        }

        user.password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)
            .map_err(|_| DomainError::internal("Failed to hash password"))?;
        user.updated_at = Utc::now();

        self.users.update(user).await
    }

    /// Updates the display name and/or phone number. At least one of the
    /// two must be provided.
    pub async fn change_profile(
        &self,
        user_id: Uuid,
        full_name: Option<String>,
        phone: Option<String>,
    ) -> DomainResult<User> {
        let has_name = full_name.as_deref().is_some_and(|v| !v.is_empty());
        let has_phone = phone.as_deref().is_some_and(|v| !v.is_empty());
        if !has_name && !has_phone {
            return Err(DomainError::validation(
                "Full name or phone number is required",
            ));
        }

        let mut user = self.user_by_id(user_id).await?;
        if has_name {
            user.full_name = full_name.unwrap_or_default();
        }
        if has_phone {
            user.phone = phone.unwrap_or_default();
        }
        user.updated_at = Utc::now();

        self.users.update(user).await
    }

    /// Uploads a replacement profile picture and stores its URL.
    pub async fn change_picture(&self, user_id: Uuid, upload: FileUpload) -> DomainResult<User> {
        if upload.bytes.is_empty() {
            return Err(DomainError::validation("Profile picture is required"));
        }

        let url = self.media.upload(upload).await?;

        let mut user = self.user_by_id(user_id).await?;
        user.profile_picture_url = url;
        user.updated_at = Utc::now();

        self.users.update(user).await
    }
}
