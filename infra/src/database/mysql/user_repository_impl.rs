//! MySQL implementation of the UserRepository trait.
//!
//! User rows carry the stored refresh token verbatim; refreshing a session
//! compares the presented token against this column byte for byte.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::user::User;
use se_core::errors::{DomainError, DomainResult};
use se_core::repositories::UserRepository;

use super::{db_error, is_duplicate};

const USER_COLUMNS: &str = "id, username, email, full_name, phone, password_hash, \
     profile_picture_url, refresh_token, created_at, updated_at";

/// MySQL-backed user store
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> DomainResult<User> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to read id: {e}")))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {e}")))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::internal(format!("Failed to read username: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to read email: {e}")))?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| DomainError::internal(format!("Failed to read full_name: {e}")))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::internal(format!("Failed to read phone: {e}")))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::internal(format!("Failed to read password_hash: {e}")))?,
            profile_picture_url: row.try_get("profile_picture_url").map_err(|e| {
                DomainError::internal(format!("Failed to read profile_picture_url: {e}"))
            })?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| DomainError::internal(format!("Failed to read refresh_token: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to read created_at: {e}")))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to read updated_at: {e}")))?,
        })
    }

    async fn fetch_one_by(&self, column: &str, value: &str) -> DomainResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find user", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.fetch_one_by("id", &id.to_string()).await
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.fetch_one_by("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.fetch_one_by("email", email).await
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let query = r#"
            INSERT INTO users (
                id, username, email, full_name, phone, password_hash,
                profile_picture_url, refresh_token, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(&user.profile_picture_url)
            .bind(&user.refresh_token)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate(&e) {
                    DomainError::conflict("User with username or email already exists")
                } else {
                    db_error("create user", e)
                }
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let query = r#"
            UPDATE users SET
                username = ?, email = ?, full_name = ?, phone = ?,
                password_hash = ?, profile_picture_url = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(&user.profile_picture_url)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }

    async fn set_refresh_token(&self, user_id: Uuid, token: Option<String>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET refresh_token = ?, updated_at = ? WHERE id = ?")
            .bind(&token)
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("set refresh token", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        Ok(())
    }
}
