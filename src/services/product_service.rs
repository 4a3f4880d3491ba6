//! Product service - Handles product catalog business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DEFAULT_PRODUCT_PRICE;
use crate::domain::{CreateProduct, Product, UpdateProduct};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Get product by ID
    async fn get_product(&self, id: Uuid) -> AppResult<Product>;

    /// List all products
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Create a new product
    async fn create_product(&self, input: CreateProduct) -> AppResult<Product>;

    /// Update an existing product
    async fn update_product(&self, id: Uuid, input: UpdateProduct) -> AppResult<Product>;

    /// Delete a product
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductService
pub struct ProductCatalog {
    products: Arc<dyn ProductRepository>,
}

impl ProductCatalog {
    /// Create new product service instance
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductService for ProductCatalog {
    async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        self.products.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.products.list().await
    }

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        if self.products.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::conflict("Product"));
        }

        let price = input
            .price
            .unwrap_or_else(|| DEFAULT_PRODUCT_PRICE.to_string());

        self.products
            .create(input.name, input.description, price)
            .await
    }

    async fn update_product(&self, id: Uuid, input: UpdateProduct) -> AppResult<Product> {
        // A changed name must stay unique across other products
        if let Some(ref name) = input.name {
            if let Some(existing) = self.products.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::conflict("Product"));
                }
            }
        }

        self.products
            .update(id, input.name, input.description, input.price)
            .await
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.products.delete(id).await
    }
}
