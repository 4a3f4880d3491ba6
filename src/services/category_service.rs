//! Category service - Handles category business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Category, CreateCategory, UpdateCategory};
use crate::errors::{AppResult, OptionExt};
use crate::infra::CategoryRepository;

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Get category by ID
    async fn get_category(&self, id: Uuid) -> AppResult<Category>;

    /// List all categories
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Create a new category
    async fn create_category(&self, input: CreateCategory) -> AppResult<Category>;

    /// Update an existing category
    async fn update_category(&self, id: Uuid, input: UpdateCategory) -> AppResult<Category>;

    /// Delete a category
    async fn delete_category(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CategoryService
pub struct CategoryCatalog {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryCatalog {
    /// Create new category service instance
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryService for CategoryCatalog {
    async fn get_category(&self, id: Uuid) -> AppResult<Category> {
        self.categories.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.list().await
    }

    async fn create_category(&self, input: CreateCategory) -> AppResult<Category> {
        self.categories.create(input.name, input.code).await
    }

    async fn update_category(&self, id: Uuid, input: UpdateCategory) -> AppResult<Category> {
        self.categories.update(id, input.name, input.code).await
    }

    async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.categories.delete(id).await
    }
}
