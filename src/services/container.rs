//! Service Container - Centralized service wiring.
//!
//! Every gate and handler receives its collaborators through this container
//! instead of resolving ambient singletons; the token service and the
//! credential store are plain injected values.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AuthService, Authenticator, CategoryCatalog, CategoryService, ProductCatalog, ProductService,
    TokenIssuer, TokenService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{Cache, CategoryStore, ProductStore, UserStore};

/// Concrete service container holding all application services.
pub struct Services {
    token_service: Arc<dyn TokenService>,
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    product_service: Arc<dyn ProductService>,
    category_service: Arc<dyn CategoryService>,
}

impl Services {
    /// Create a new service container with explicitly injected services.
    pub fn new(
        token_service: Arc<dyn TokenService>,
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
        category_service: Arc<dyn CategoryService>,
    ) -> Self {
        Self {
            token_service,
            auth_service,
            user_service,
            product_service,
            category_service,
        }
    }

    /// Wire all services from a database connection, cache, and config.
    pub fn from_connection(db: DatabaseConnection, cache: Arc<Cache>, config: Config) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        let products = Arc::new(ProductStore::new(db.clone()));
        let categories = Arc::new(CategoryStore::new(db));

        let token_service: Arc<dyn TokenService> = Arc::new(TokenIssuer::new(config, cache));
        let auth_service: Arc<dyn AuthService> =
            Arc::new(Authenticator::new(users.clone(), token_service.clone()));
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(users));
        let product_service: Arc<dyn ProductService> = Arc::new(ProductCatalog::new(products));
        let category_service: Arc<dyn CategoryService> =
            Arc::new(CategoryCatalog::new(categories));

        Self {
            token_service,
            auth_service,
            user_service,
            product_service,
            category_service,
        }
    }

    /// Get token service
    pub fn tokens(&self) -> Arc<dyn TokenService> {
        self.token_service.clone()
    }

    /// Get authentication service
    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    /// Get user service
    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    /// Get product service
    pub fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    /// Get category service
    pub fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }
}
