//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product domain entity.
///
/// Price is kept as a decimal string to preserve the exact value the client
/// sent (no float rounding on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    /// Unique product name (minimum 3 characters)
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    #[schema(example = "papas fritas", min_length = 3)]
    pub name: String,
    /// Product description (minimum 10 characters when present)
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    #[schema(example = "Papas fritas crocantes y saladas", min_length = 10)]
    pub description: Option<String>,
    /// Product price as a decimal string (defaults to "0")
    #[schema(example = "15.50")]
    pub price: Option<String>,
}

/// Product update data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    /// New product name (minimum 3 characters)
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    #[schema(example = "papas actualizadas", min_length = 3)]
    pub name: Option<String>,
    /// New description (minimum 10 characters)
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    #[schema(example = "Descripción actualizada del producto", min_length = 10)]
    pub description: Option<String>,
    /// New price as a decimal string
    #[schema(example = "17.99")]
    pub price: Option<String>,
}

/// Product response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = "7f1c2c60-9f35-4f57-9e60-0a8f4a1a2b3c")]
    pub id: Uuid,
    #[schema(example = "papas fritas")]
    pub name: String,
    #[schema(example = "Papas fritas crocantes y saladas")]
    pub description: Option<String>,
    #[schema(example = "15.50")]
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
