//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Redis (token denylist, rate limiting)

pub mod cache;
pub mod db;
pub mod repositories;

pub use cache::{Cache, RevocationStore};
pub use db::{Database, Migrator};
pub use repositories::{
    CategoryRepository, CategoryStore, ProductRepository, ProductStore, UserChanges,
    UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use cache::MockRevocationStore;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCategoryRepository, MockProductRepository, MockUserRepository};
