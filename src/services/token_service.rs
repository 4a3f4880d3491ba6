//! Token service - issues, verifies, and revokes JSON Web Tokens.
//!
//! A token is valid only if its signature checks out, it has not expired,
//! and its `jti` is absent from the revocation store. Revocation entries
//! live exactly as long as the token they block.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::RevocationStore;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    /// Unique token id, the unit of revocation
    pub jti: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Remaining lifetime in seconds (zero if already expired)
    pub fn remaining_seconds(&self) -> u64 {
        (self.exp - Utc::now().timestamp()).max(0) as u64
    }
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Token service trait for dependency injection.
///
/// Handlers and middleware receive this explicitly instead of reaching for
/// any ambient signing state.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Issue a signed token for a user
    fn issue(&self, user: &User) -> AppResult<TokenResponse>;

    /// Verify a token: signature, expiry, then revocation
    async fn verify(&self, token: &str) -> AppResult<Claims>;

    /// Invalidate a token so future `verify` calls reject it.
    /// Idempotent; invalidating garbage or an already-dead token is a no-op.
    async fn invalidate(&self, token: &str) -> AppResult<()>;
}

/// Concrete implementation of TokenService
pub struct TokenIssuer {
    config: Config,
    revocations: Arc<dyn RevocationStore>,
}

impl TokenIssuer {
    /// Create new token service instance
    pub fn new(config: Config, revocations: Arc<dyn RevocationStore>) -> Self {
        Self {
            config,
            revocations,
        }
    }

    /// Decode a token without enforcing expiry (used for revocation, where
    /// an expired token just means there is nothing left to block).
    fn decode_lenient(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::default();
        validation.validate_exp = false;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .ok()
    }
}

#[async_trait]
impl TokenService for TokenIssuer {
    fn issue(&self, user: &User) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.to_string(),
            jti: Uuid::new_v4(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        // A signing failure is an operational fault, not a client error
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))?;

        Ok(TokenResponse {
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }

    async fn verify(&self, token: &str) -> AppResult<Claims> {
        // Signature and expiry checks; failure kind stays server-side
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        let claims = token_data.claims;

        if self.revocations.is_revoked(claims.jti).await? {
            return Err(AppError::TokenRevoked);
        }

        Ok(claims)
    }

    async fn invalidate(&self, token: &str) -> AppResult<()> {
        let Some(claims) = self.decode_lenient(token) else {
            // Not one of ours; nothing to revoke
            return Ok(());
        };

        self.revocations
            .revoke(claims.jti, claims.remaining_seconds().max(1))
            .await
    }
}
