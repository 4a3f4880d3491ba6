//! User service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use tienda_api::domain::{UpdateUser, User, UserRole};
use tienda_api::errors::AppError;
use tienda_api::infra::MockUserRepository;
use tienda_api::services::{UserManager, UserService};

fn create_test_user(id: Uuid) -> User {
    User {
        id,
        email: "test@example.com".to_string(),
        password_hash: "hashed".to_string(),
        name: "Test User".to_string(),
        role: UserRole::User,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn empty_update() -> UpdateUser {
    UpdateUser {
        name: None,
        email: None,
        role: None,
        password: None,
    }
}

#[tokio::test]
async fn test_get_user_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(move |id| Ok(Some(create_test_user(id))));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(user_id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user_id);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_list().returning(|| {
        Ok(vec![
            create_test_user(Uuid::new_v4()),
            create_test_user(Uuid::new_v4()),
        ])
    });

    let service = UserManager::new(Arc::new(repo));
    let result = service.list_users().await;

    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_user_rejects_taken_email() {
    let user_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(create_test_user(other_id))));
    repo.expect_update().times(0);

    let service = UserManager::new(Arc::new(repo));
    let update = UpdateUser {
        email: Some("taken@example.com".to_string()),
        ..empty_update()
    };
    let result = service.update_user(user_id, update).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_update_user_keeps_own_email() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    // The email resolves to the user being updated; not a conflict
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(create_test_user(user_id))));
    repo.expect_update()
        .returning(move |id, _| Ok(create_test_user(id)));

    let service = UserManager::new(Arc::new(repo));
    let update = UpdateUser {
        email: Some("test@example.com".to_string()),
        ..empty_update()
    };
    let result = service.update_user(user_id, update).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_update_user_hashes_new_password() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(|_, changes| {
            changes
                .password_hash
                .as_deref()
                .is_some_and(|h| h.starts_with("$argon2"))
        })
        .returning(move |id, _| Ok(create_test_user(id)));

    let service = UserManager::new(Arc::new(repo));
    let update = UpdateUser {
        password: Some("BrandNewPass1".to_string()),
        ..empty_update()
    };

    assert!(service.update_user(user_id, update).await.is_ok());
}

#[tokio::test]
async fn test_delete_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().returning(|_| Ok(()));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(Uuid::new_v4()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_missing_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
