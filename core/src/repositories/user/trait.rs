//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Repository contract for User entities.
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between the domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by their unique username
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    /// Find a user by their unique email address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Persist a new user
    ///
    /// Fails with `DomainError::Conflict` when the username or email is
    /// already taken.
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Update an existing user in place
    ///
    /// Fails with `DomainError::NotFound` when the user does not exist.
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Overwrite the stored refresh token for a user.
    ///
    /// Passing `None` clears the token, which permanently strands every
    /// outstanding refresh token for that account.
    async fn set_refresh_token(&self, user_id: Uuid, token: Option<String>) -> DomainResult<()>;
}
