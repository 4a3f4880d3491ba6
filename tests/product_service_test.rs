//! Product service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use tienda_api::domain::{CreateProduct, Product, UpdateProduct};
use tienda_api::errors::AppError;
use tienda_api::infra::MockProductRepository;
use tienda_api::services::{ProductCatalog, ProductService};

fn test_product(id: Uuid, name: &str, description: Option<&str>, price: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.map(String::from),
        price: price.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn created_product_round_trips_unchanged() {
    let product_id = Uuid::new_v4();

    let mut repo = MockProductRepository::new();
    repo.expect_find_by_name().returning(|_| Ok(None));
    repo.expect_create()
        .returning(move |name, description, price| {
            Ok(Product {
                id: product_id,
                name,
                description,
                price,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });
    repo.expect_find_by_id()
        .with(eq(product_id))
        .returning(move |id| {
            Ok(Some(test_product(
                id,
                "papas fritas",
                Some("Papas fritas crocantes y saladas"),
                "15.50",
            )))
        });

    let service = ProductCatalog::new(Arc::new(repo));

    let created = service
        .create_product(CreateProduct {
            name: "papas fritas".to_string(),
            description: Some("Papas fritas crocantes y saladas".to_string()),
            price: Some("15.50".to_string()),
        })
        .await
        .unwrap();

    let fetched = service.get_product(product_id).await.unwrap();

    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.description, created.description);
    assert_eq!(fetched.price, created.price);
    assert_eq!(fetched.price, "15.50");
}

#[tokio::test]
async fn create_defaults_price_to_zero() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_name().returning(|_| Ok(None));
    repo.expect_create()
        .withf(|_, _, price| price == "0")
        .returning(|name, description, price| {
            Ok(Product {
                id: Uuid::new_v4(),
                name,
                description,
                price,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

    let service = ProductCatalog::new(Arc::new(repo));
    let product = service
        .create_product(CreateProduct {
            name: "sin precio".to_string(),
            description: None,
            price: None,
        })
        .await
        .unwrap();

    assert_eq!(product.price, "0");
}

#[tokio::test]
async fn duplicate_name_conflicts() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_name()
        .returning(|name| Ok(Some(test_product(Uuid::new_v4(), name, None, "1.00"))));
    repo.expect_create().times(0);

    let service = ProductCatalog::new(Arc::new(repo));
    let result = service
        .create_product(CreateProduct {
            name: "papas fritas".to_string(),
            description: None,
            price: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn rename_to_taken_name_conflicts() {
    let product_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();

    let mut repo = MockProductRepository::new();
    repo.expect_find_by_name()
        .returning(move |name| Ok(Some(test_product(other_id, name, None, "1.00"))));
    repo.expect_update().times(0);

    let service = ProductCatalog::new(Arc::new(repo));
    let result = service
        .update_product(
            product_id,
            UpdateProduct {
                name: Some("taken".to_string()),
                description: None,
                price: None,
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn get_missing_product_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = ProductCatalog::new(Arc::new(repo));
    let result = service.get_product(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn list_returns_all_products() {
    let mut repo = MockProductRepository::new();
    repo.expect_list().returning(|| {
        Ok(vec![
            test_product(Uuid::new_v4(), "papas", Some("demo1"), "13.00"),
            test_product(Uuid::new_v4(), "gaseosa", None, "5.00"),
        ])
    });

    let service = ProductCatalog::new(Arc::new(repo));
    let products = service.list_products().await.unwrap();

    assert_eq!(products.len(), 2);
}
