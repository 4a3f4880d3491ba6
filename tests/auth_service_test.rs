//! Authentication service tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use tienda_api::domain::{Password, User, UserRole};
use tienda_api::errors::{AppError, AppResult};
use tienda_api::infra::MockUserRepository;
use tienda_api::services::{AuthService, Authenticator, Claims, TokenResponse, TokenService};

/// Stub token service that hands out a fixed token
struct StubTokenService;

#[async_trait]
impl TokenService for StubTokenService {
    fn issue(&self, user: &User) -> AppResult<TokenResponse> {
        Ok(TokenResponse {
            token: format!("stub-token-{}", user.id),
            token_type: "Bearer".to_string(),
            expires_in: 86400,
        })
    }

    async fn verify(&self, _token: &str) -> AppResult<Claims> {
        Err(AppError::Unauthorized)
    }

    async fn invalidate(&self, _token: &str) -> AppResult<()> {
        Ok(())
    }
}

fn user_with_password(email: &str, plain: &str) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: Password::new(plain).unwrap().into_string(),
        name: "Test User".to_string(),
        role: UserRole::User,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn authenticator(repo: MockUserRepository) -> Authenticator {
    Authenticator::new(Arc::new(repo), Arc::new(StubTokenService))
}

#[tokio::test]
async fn register_stores_a_hash_not_the_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .withf(|_name, _role, _email, hash| hash.starts_with("$argon2"))
        .returning(|name, role, email, password_hash| {
            Ok(User {
                id: Uuid::new_v4(),
                email,
                password_hash,
                name,
                role,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

    let service = authenticator(repo);
    let user = service
        .register(
            "New User".to_string(),
            UserRole::User,
            "new@example.com".to_string(),
            "SuperSecret99".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.role, UserRole::User);
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(|email| Ok(Some(user_with_password(email, "ExistingPass1"))));
    // create must never run for a taken email
    repo.expect_create().times(0);

    let service = authenticator(repo);
    let result = service
        .register(
            "Dup User".to_string(),
            UserRole::User,
            "taken@example.com".to_string(),
            "SuperSecret99".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn register_rejects_short_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create().times(0);

    let service = authenticator(repo);
    let result = service
        .register(
            "User".to_string(),
            UserRole::User,
            "user@example.com".to_string(),
            "short".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn login_with_valid_credentials_returns_token() {
    let user = user_with_password("login@example.com", "CorrectHorse1");
    let user_id = user.id;

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let service = authenticator(repo);
    let response = service
        .login("login@example.com".to_string(), "CorrectHorse1".to_string())
        .await
        .unwrap();

    // The token is bound to the authenticated user's id
    assert_eq!(response.token, format!("stub-token-{}", user_id));
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let user = user_with_password("login@example.com", "CorrectHorse1");

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let service = authenticator(repo);
    let result = service
        .login("login@example.com".to_string(), "WrongHorse99".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn login_with_unknown_email_is_rejected() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));

    let service = authenticator(repo);
    let result = service
        .login("ghost@example.com".to_string(), "AnyPassword1".to_string())
        .await;

    // Same error as a bad password; the response must not reveal which
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}
