//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Password, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{UserChanges, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Update user details
    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User>;

    /// Delete user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User> {
        // A changed email must stay unique across other users
        if let Some(ref email) = update.email {
            if let Some(existing) = self.users.find_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::conflict("User"));
                }
            }
        }

        let password_hash = match update.password {
            Some(ref plain) => Some(Password::new(plain)?.into_string()),
            None => None,
        };

        let changes = UserChanges {
            name: update.name,
            email: update.email,
            role: update.role,
            password_hash,
        };

        self.users.update(id, changes).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.users.delete(id).await
    }
}
