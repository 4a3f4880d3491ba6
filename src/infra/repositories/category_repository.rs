//! Category repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use super::entities::category::{ActiveModel, Entity as CategoryEntity};
use crate::domain::Category;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// Create a new category
    async fn create(&self, name: String, code: String) -> AppResult<Category>;

    /// Update category fields
    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        code: Option<String>,
    ) -> AppResult<Category>;

    /// Delete category by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// List all categories
    async fn list(&self) -> AppResult<Vec<Category>>;
}

/// Concrete implementation of CategoryRepository
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }

    async fn create(&self, name: String, code: String) -> AppResult<Category> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            code: Set(code),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Category::from(model))
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        code: Option<String>,
    ) -> AppResult<Category> {
        let category = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = category.into();

        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(code) = code {
            active.code = Set(code);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Category::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }
}
