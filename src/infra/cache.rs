//! Redis cache implementation.
//!
//! Backs the two pieces of cross-request state this service keeps outside
//! the database: the revoked-token denylist and rate-limit counters.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};
use uuid::Uuid;

use crate::config::{Config, CACHE_PREFIX_RATE_LIMIT, CACHE_PREFIX_REVOKED};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Revocation record for issued tokens.
///
/// Entries carry a TTL equal to the remaining token lifetime, so the
/// denylist never outgrows the set of tokens that could still verify.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Mark a token id as revoked for `ttl_seconds`. Idempotent.
    async fn revoke(&self, jti: Uuid, ttl_seconds: u64) -> AppResult<()>;

    /// Check whether a token id has been revoked.
    async fn is_revoked(&self, jti: Uuid) -> AppResult<bool>;
}

/// Redis cache wrapper with connection pooling.
#[derive(Clone)]
pub struct Cache {
    connection: ConnectionManager,
}

impl Cache {
    /// Create a new cache instance and connect to Redis.
    ///
    /// # Panics
    /// Panics if Redis connection fails.
    pub async fn connect(config: &Config) -> Self {
        let client =
            Client::open(config.redis_url.as_str()).expect("Failed to create Redis client");

        let connection = ConnectionManager::new(client)
            .await
            .expect("Failed to connect to Redis");

        tracing::info!("Redis cache connected");

        Self { connection }
    }

    /// Try to connect to Redis, returning an error instead of panicking.
    pub async fn try_connect(config: &Config) -> Result<Self, RedisError> {
        let client = Client::open(config.redis_url.as_str())?;
        let connection = ConnectionManager::new(client).await?;

        Ok(Self { connection })
    }

    /// Check if a key exists.
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.connection.clone();
        let exists: bool = conn.exists(key).await.map_err(cache_error)?;
        Ok(exists)
    }

    // =========================================================================
    // Rate Limiting Operations
    // =========================================================================

    /// Check and increment rate limit counter.
    /// Returns (current_count, is_allowed) tuple.
    pub async fn check_rate_limit(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
    ) -> AppResult<(u64, bool)> {
        let key = format!("{}{}", CACHE_PREFIX_RATE_LIMIT, identifier);
        let mut conn = self.connection.clone();

        let exists: bool = conn.exists(&key).await.map_err(cache_error)?;

        if !exists {
            // First request in window
            let _: () = conn
                .set_ex(&key, 1i64, window_seconds)
                .await
                .map_err(cache_error)?;
            return Ok((1, true));
        }

        let count: i64 = conn.incr(&key, 1).await.map_err(cache_error)?;
        let count = count as u64;
        let allowed = count <= max_requests;

        Ok((count, allowed))
    }
}

#[async_trait]
impl RevocationStore for Cache {
    async fn revoke(&self, jti: Uuid, ttl_seconds: u64) -> AppResult<()> {
        let key = format!("{}{}", CACHE_PREFIX_REVOKED, jti);
        let mut conn = self.connection.clone();

        // SET with TTL; overwriting an existing entry keeps this idempotent
        let _: () = conn
            .set_ex(&key, 1i64, ttl_seconds.max(1))
            .await
            .map_err(cache_error)?;

        Ok(())
    }

    async fn is_revoked(&self, jti: Uuid) -> AppResult<bool> {
        let key = format!("{}{}", CACHE_PREFIX_REVOKED, jti);
        let mut conn = self.connection.clone();
        let revoked: bool = conn.exists(&key).await.map_err(cache_error)?;
        Ok(revoked)
    }
}

/// Convert Redis errors into application errors
fn cache_error(e: RedisError) -> AppError {
    AppError::internal(format!("Redis error: {}", e))
}
