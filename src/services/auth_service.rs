//! Authentication service - registration and credential verification.
//!
//! Token issuance is delegated to the injected `TokenService`; this service
//! only decides whether the caller proved who they are.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

use super::{TokenResponse, TokenService};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(
        &self,
        name: String,
        role: UserRole,
        email: String,
        password: String,
    ) -> AppResult<User>;

    /// Login and return a signed token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;
}

/// Concrete implementation of AuthService
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        name: String,
        role: UserRole,
        email: String,
        password: String,
    ) -> AppResult<User> {
        // Email format is validated by the handler's ValidatedJson extractor
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.users.create(name, role, email, password_hash).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.users.find_by_email(&email).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid emails.
        // We use a dummy hash that will always fail verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified user_exists is true
        self.tokens.issue(user_result.as_ref().unwrap())
    }
}
