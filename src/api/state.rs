//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Cache, Database};
use crate::services::{
    AuthService, CategoryService, ProductService, Services, TokenService, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Token service (issue/verify/invalidate)
    pub token_service: Arc<dyn TokenService>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Product service
    pub product_service: Arc<dyn ProductService>,
    /// Category service
    pub category_service: Arc<dyn CategoryService>,
    /// Redis cache (revocation list, rate limit counters)
    pub cache: Arc<Cache>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database, cache and config.
    ///
    /// This is the recommended way to create AppState as it wires all
    /// services through the service container.
    pub fn from_config(
        database: Arc<Database>,
        cache: Arc<Cache>,
        config: crate::config::Config,
    ) -> Self {
        let services = Services::from_connection(database.get_connection(), cache.clone(), config);

        Self {
            token_service: services.tokens(),
            auth_service: services.auth(),
            user_service: services.users(),
            product_service: services.products(),
            category_service: services.categories(),
            cache,
            database,
        }
    }
}
