//! Category domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Category domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    /// Category name (maximum 100 characters)
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Ropa Deportiva", max_length = 100)]
    pub name: String,
    /// Category code (maximum 100 characters)
    #[validate(length(min = 1, max = 100, message = "Code must be 1-100 characters"))]
    #[schema(example = "DEP2024", max_length = 100)]
    pub code: String,
}

/// Category update data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    /// New category name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Ropa Casual", max_length = 100)]
    pub name: Option<String>,
    /// New category code
    #[validate(length(min = 1, max = 100, message = "Code must be 1-100 characters"))]
    #[schema(example = "CAS2024", max_length = 100)]
    pub code: Option<String>,
}

/// Category response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = "3d1b6a2e-4c5f-4b88-9a9e-2f6c7d8e9f00")]
    pub id: Uuid,
    #[schema(example = "Ropa Deportiva")]
    pub name: String,
    #[schema(example = "DEP2024")]
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            code: category.code,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
