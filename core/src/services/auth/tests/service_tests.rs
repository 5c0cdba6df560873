//! Unit tests for the account service

use std::sync::Arc;

use crate::errors::DomainError;
use crate::repositories::MockUserRepository;
use crate::services::auth::{AuthService, LoginRequest, RegisterRequest};
use crate::services::media::mock::MockMediaStorage;
use crate::services::media::FileUpload;
use crate::services::token::{TokenService, TokenServiceConfig};

type TestAuthService = AuthService<MockUserRepository, MockMediaStorage>;

fn build_service() -> (TestAuthService, Arc<TokenService<MockUserRepository>>) {
    let users = Arc::new(MockUserRepository::new());
    let media = Arc::new(MockMediaStorage::new());
    let tokens = Arc::new(TokenService::new(
        users.clone(),
        TokenServiceConfig::default(),
    ));
    (
        AuthService::new(users, media, tokens.clone()),
        tokens,
    )
}

fn register_request(password: &str) -> RegisterRequest {
    RegisterRequest {
        username: "traveller".to_string(),
        email: "traveller@example.com".to_string(),
        full_name: "Test Traveller".to_string(),
        phone: "0123456789".to_string(),
        password: password.to_string(),
        profile_picture: FileUpload::new("avatar.png", vec![1, 2, 3]),
    }
}

#[tokio::test]
async fn password_of_length_seven_is_rejected() {
    let (service, _) = build_service();

    let result = service.register(register_request("seven77")).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn password_of_length_eight_passes_the_length_check() {
    let (service, _) = build_service();

    let user = service.register(register_request("eight888")).await.unwrap();
    assert_eq!(user.username, "traveller");
    assert!(user.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn email_without_at_sign_is_rejected() {
    let (service, _) = build_service();

    let mut request = register_request("password1");
    request.email = "not-an-email".to_string();

    let result = service.register(request).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let (service, _) = build_service();

    service.register(register_request("password1")).await.unwrap();

    let result = service.register(register_request("password2")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn login_with_correct_password_issues_tokens() {
    let (service, _) = build_service();
    service.register(register_request("password1")).await.unwrap();

    let (user, pair) = service
        .login(LoginRequest {
            username: Some("traveller".to_string()),
            email: None,
            password: "password1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "traveller");
    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
}

#[tokio::test]
async fn login_by_email_also_works() {
    let (service, _) = build_service();
    service.register(register_request("password1")).await.unwrap();

    let result = service
        .login(LoginRequest {
            username: None,
            email: Some("traveller@example.com".to_string()),
            password: "password1".to_string(),
        })
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let (service, _) = build_service();
    service.register(register_request("password1")).await.unwrap();

    let result = service
        .login(LoginRequest {
            username: Some("traveller".to_string()),
            email: None,
            password: "wrong-password".to_string(),
        })
        .await;
    assert!(matches!(result, Err(DomainError::Auth { .. })));
}

#[tokio::test]
async fn login_for_unknown_user_is_not_found() {
    let (service, _) = build_service();

    let result = service
        .login(LoginRequest {
            username: Some("nobody".to_string()),
            email: None,
            password: "password1".to_string(),
        })
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn logout_invalidates_the_refresh_token() {
    let (service, tokens) = build_service();
    service.register(register_request("password1")).await.unwrap();

    let (user, pair) = service
        .login(LoginRequest {
            username: Some("traveller".to_string()),
            email: None,
            password: "password1".to_string(),
        })
        .await
        .unwrap();

    service.logout(user.id).await.unwrap();

    let result = tokens.refresh(&pair.refresh_token).await;
    assert!(matches!(result, Err(DomainError::Auth { .. })));
}

#[tokio::test]
async fn change_password_requires_the_current_one() {
    let (service, _) = build_service();
    let user = service.register(register_request("password1")).await.unwrap();

    let wrong = service
        .change_password(user.id, "not-the-password", "newpassword")
        .await;
    assert!(matches!(wrong, Err(DomainError::Auth { .. })));

    service
        .change_password(user.id, "password1", "newpassword")
        .await
        .unwrap();

    let login = service
        .login(LoginRequest {
            username: Some("traveller".to_string()),
            email: None,
            password: "newpassword".to_string(),
        })
        .await;
    assert!(login.is_ok());
}

#[tokio::test]
async fn change_profile_requires_at_least_one_field() {
    let (service, _) = build_service();
    let user = service.register(register_request("password1")).await.unwrap();

    let neither = service.change_profile(user.id, None, None).await;
    assert!(matches!(neither, Err(DomainError::Validation { .. })));

    let updated = service
        .change_profile(user.id, Some("New Name".to_string()), None)
        .await
        .unwrap();
    assert_eq!(updated.full_name, "New Name");
    assert_eq!(updated.phone, "0123456789");
}

#[tokio::test]
async fn change_picture_uploads_and_stores_the_url() {
    let (service, _) = build_service();
    let user = service.register(register_request("password1")).await.unwrap();

    let updated = service
        .change_picture(user.id, FileUpload::new("new-avatar.png", vec![9, 9]))
        .await
        .unwrap();
    assert_eq!(updated.profile_picture_url, "https://cdn.test/new-avatar.png");
}
