//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod category_repository;
pub(crate) mod entities;
mod product_repository;
mod user_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use user_repository::{UserChanges, UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
