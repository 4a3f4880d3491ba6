//! Category service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use tienda_api::domain::{Category, CreateCategory, UpdateCategory};
use tienda_api::errors::AppError;
use tienda_api::infra::MockCategoryRepository;
use tienda_api::services::{CategoryCatalog, CategoryService};

fn test_category(id: Uuid, name: &str, code: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        code: code.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn create_category_passes_fields_through() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_create()
        .with(eq("Ropa Deportiva".to_string()), eq("DEP2024".to_string()))
        .returning(|name, code| Ok(test_category(Uuid::new_v4(), &name, &code)));

    let service = CategoryCatalog::new(Arc::new(repo));
    let category = service
        .create_category(CreateCategory {
            name: "Ropa Deportiva".to_string(),
            code: "DEP2024".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(category.name, "Ropa Deportiva");
    assert_eq!(category.code, "DEP2024");
}

#[tokio::test]
async fn get_missing_category_not_found() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = CategoryCatalog::new(Arc::new(repo));
    let result = service.get_category(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn update_category_applies_partial_changes() {
    let category_id = Uuid::new_v4();

    let mut repo = MockCategoryRepository::new();
    repo.expect_update()
        .withf(|_, name, code| name.is_some() && code.is_none())
        .returning(move |id, name, _| {
            Ok(test_category(id, name.as_deref().unwrap_or(""), "DEP2024"))
        });

    let service = CategoryCatalog::new(Arc::new(repo));
    let category = service
        .update_category(
            category_id,
            UpdateCategory {
                name: Some("Ropa Casual".to_string()),
                code: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(category.name, "Ropa Casual");
}

#[tokio::test]
async fn delete_missing_category_not_found() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let service = CategoryCatalog::new(Arc::new(repo));
    let result = service.delete_category(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn list_returns_all_categories() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_list().returning(|| {
        Ok(vec![
            test_category(Uuid::new_v4(), "Ropa Deportiva", "DEP2024"),
            test_category(Uuid::new_v4(), "Calzado", "CAL2024"),
        ])
    });

    let service = CategoryCatalog::new(Arc::new(repo));
    let categories = service.list_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
}
