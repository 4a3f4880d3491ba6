//! Token service tests.
//!
//! Covers the token lifecycle: issue, verify, revoke, and the failure
//! modes that must all collapse into a generic rejection at the HTTP edge.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use tienda_api::domain::{User, UserRole};
use tienda_api::errors::AppError;
use tienda_api::infra::MockRevocationStore;
use tienda_api::services::{TokenIssuer, TokenService};
use tienda_api::Config;

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn test_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        password_hash: "hashed".to_string(),
        name: "Test User".to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn issuer_with(revocations: MockRevocationStore, expiration_hours: i64) -> TokenIssuer {
    TokenIssuer::new(
        Config::with_secret(TEST_SECRET, expiration_hours),
        Arc::new(revocations),
    )
}

#[tokio::test]
async fn issued_token_verifies_to_same_principal() {
    let mut revocations = MockRevocationStore::new();
    revocations.expect_is_revoked().returning(|_| Ok(false));

    let service = issuer_with(revocations, 24);
    let user = test_user(UserRole::User);

    let response = service.issue(&user).unwrap();
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.expires_in, 24 * 3600);

    let claims = service.verify(&response.token).await.unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, "user");
}

#[tokio::test]
async fn admin_role_is_carried_in_claims() {
    let mut revocations = MockRevocationStore::new();
    revocations.expect_is_revoked().returning(|_| Ok(false));

    let service = issuer_with(revocations, 24);
    let response = service.issue(&test_user(UserRole::Admin)).unwrap();

    let claims = service.verify(&response.token).await.unwrap();
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let revocations = MockRevocationStore::new();
    let service = issuer_with(revocations, 24);

    let mut revocations_other = MockRevocationStore::new();
    revocations_other.expect_is_revoked().returning(|_| Ok(false));
    let other = TokenIssuer::new(
        Config::with_secret("another-secret-key-of-32-chars!!!", 24),
        Arc::new(revocations_other),
    );

    // Signed under a different key; must not verify here
    let foreign = other.issue(&test_user(UserRole::User)).unwrap();
    let result = service.verify(&foreign.token).await;

    assert!(matches!(result, Err(AppError::Jwt(_))));
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let revocations = MockRevocationStore::new();
    // Expiry one hour in the past, well beyond validation leeway
    let service = issuer_with(revocations, -1);

    let response = service.issue(&test_user(UserRole::User)).unwrap();
    let result = service.verify(&response.token).await;

    assert!(matches!(result, Err(AppError::Jwt(_))));
}

#[tokio::test]
async fn revoked_token_fails_verification() {
    let mut revocations = MockRevocationStore::new();
    revocations.expect_revoke().returning(|_, _| Ok(()));
    revocations.expect_is_revoked().returning(|_| Ok(true));

    let service = issuer_with(revocations, 24);
    let response = service.issue(&test_user(UserRole::User)).unwrap();

    service.invalidate(&response.token).await.unwrap();
    let result = service.verify(&response.token).await;

    assert!(matches!(result, Err(AppError::TokenRevoked)));
}

#[tokio::test]
async fn invalidate_is_idempotent() {
    let mut revocations = MockRevocationStore::new();
    revocations.expect_revoke().times(2).returning(|_, _| Ok(()));

    let service = issuer_with(revocations, 24);
    let response = service.issue(&test_user(UserRole::User)).unwrap();

    assert!(service.invalidate(&response.token).await.is_ok());
    assert!(service.invalidate(&response.token).await.is_ok());
}

#[tokio::test]
async fn invalidating_garbage_is_a_noop() {
    let mut revocations = MockRevocationStore::new();
    // The store must never be touched for tokens we cannot decode
    revocations.expect_revoke().times(0);

    let service = issuer_with(revocations, 24);
    assert!(service.invalidate("not-a-jwt").await.is_ok());
}

#[tokio::test]
async fn each_issued_token_gets_a_fresh_id() {
    let mut revocations = MockRevocationStore::new();
    revocations.expect_is_revoked().returning(|_| Ok(false));

    let service = issuer_with(revocations, 24);
    let user = test_user(UserRole::User);

    let first = service.issue(&user).unwrap();
    let second = service.issue(&user).unwrap();

    let first_claims = service.verify(&first.token).await.unwrap();
    let second_claims = service.verify(&second.token).await.unwrap();

    // Revoking one session must not affect the other
    assert_ne!(first_claims.jti, second_claims.jti);
}
