//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::config::TokenServiceConfig;

/// Service managing the access/refresh token lifecycle.
///
/// The active refresh token is stored verbatim on the user record, so each
/// account has at most one usable refresh token at a time: issuing a new
/// pair overwrites the stored value and strands every earlier session's
/// refresh capability. Previously issued access tokens stay valid until
/// their own expiry; only refresh is revocable.
pub struct TokenService<U: UserRepository> {
    users: Arc<U>,
    config: TokenServiceConfig,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl<U: UserRepository> TokenService<U> {
    pub fn new(users: Arc<U>, config: TokenServiceConfig) -> Self {
        let access_encoding = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            users,
            config,
            access_encoding,
            access_decoding,
            refresh_encoding,
            refresh_decoding,
            validation,
        }
    }

    /// Issues a new access/refresh token pair for a user and persists the
    /// refresh token on the user record, overwriting any prior value.
    pub async fn issue_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.sign_access(user)?;
        let refresh_token = self.sign_refresh(user.id)?;

        self.users
            .set_refresh_token(user.id, Some(refresh_token.clone()))
            .await?;

        tracing::debug!(user_id = %user.id, "issued token pair");

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Statelessly verifies an access token against signature and expiry.
    /// Storage is never consulted here.
    pub fn verify_access(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.access_decoding, &self.validation)
            .map_err(map_jwt_error)?;
        Ok(data.claims)
    }

    /// Exchanges a refresh token for a brand-new pair (rotation).
    ///
    /// The presented token must verify cryptographically, its subject must
    /// still exist, and it must exactly equal the refresh token currently
    /// stored for that user. The equality check is what detects reuse of a
    /// rotated-out token. Returns the user together with the new pair.
    pub async fn refresh(&self, presented: &str) -> DomainResult<(User, TokenPair)> {
        let data = decode::<Claims>(presented, &self.refresh_decoding, &self.validation)
            .map_err(map_jwt_error)?;

        let user_id = data
            .claims
            .user_id()
            .map_err(|_| DomainError::auth("Invalid refresh token"))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::auth("Invalid refresh token"))?;

        if user.refresh_token.as_deref() != Some(presented) {
            tracing::warn!(user_id = %user.id, "refresh token reuse or stale token detected");
            return Err(DomainError::auth("Refresh token is expired or used"));
        }

        let pair = self.issue_pair(&user).await?;
        Ok((user, pair))
    }

    /// Clears the stored refresh token for a user, permanently disabling
    /// every outstanding refresh token even if not yet expired.
    pub async fn invalidate(&self, user_id: Uuid) -> DomainResult<()> {
        self.users.set_refresh_token(user_id, None).await?;
        tracing::debug!(user_id = %user_id, "refresh token invalidated");
        Ok(())
    }

    fn sign_access(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new_access(
            user.id,
            &user.username,
            &user.email,
            self.config.access_expiry_minutes,
        );
        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|_| DomainError::internal("Failed to generate access token"))
    }

    fn sign_refresh(&self, user_id: Uuid) -> DomainResult<String> {
        let claims = Claims::new_refresh(user_id, self.config.refresh_expiry_days);
        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|_| DomainError::internal("Failed to generate refresh token"))
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> DomainError {
    match error.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => DomainError::auth("Token expired"),
        _ => DomainError::auth("Invalid token"),
    }
}
