//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

use super::trait_::UserRepository;

/// In-memory user repository for unit tests
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an existing user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(DomainError::conflict(
                "User with username or email already exists",
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn set_refresh_token(&self, user_id: Uuid, token: Option<String>) -> DomainResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.refresh_token = token;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(username: &str, email: &str) -> User {
        User::new(
            username.to_string(),
            email.to_string(),
            "Full Name".to_string(),
            "0123456789".to_string(),
            "$2b$12$hash".to_string(),
            "https://cdn.example.com/p.png".to_string(),
        )
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("alice", "alice@example.com"))
            .await
            .unwrap();

        let result = repo.create(sample_user("alice", "other@example.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn refresh_token_can_be_set_and_cleared() {
        let repo = MockUserRepository::new();
        let user = repo
            .create(sample_user("bob", "bob@example.com"))
            .await
            .unwrap();

        repo.set_refresh_token(user.id, Some("token-1".to_string()))
            .await
            .unwrap();
        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some("token-1"));

        repo.set_refresh_token(user.id, None).await.unwrap();
        let cleared = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert!(cleared.refresh_token.is_none());
    }
}
