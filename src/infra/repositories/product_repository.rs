//! Product repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::Product;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find product by its unique name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>>;

    /// Create a new product
    async fn create(
        &self,
        name: String,
        description: Option<String>,
        price: String,
    ) -> AppResult<Product>;

    /// Update product fields
    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
        price: Option<String>,
    ) -> AppResult<Product>;

    /// Delete product by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// List all products
    async fn list(&self) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        let result = ProductEntity::find()
            .filter(product::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn create(
        &self,
        name: String,
        description: Option<String>,
        price: String,
    ) -> AppResult<Product> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            description: Set(description),
            price: Set(price),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
        price: Option<String>,
    ) -> AppResult<Product> {
        let product = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = product.into();

        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(description) = description {
            active.description = Set(Some(description));
        }
        if let Some(price) = price {
            active.price = Set(price);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}
