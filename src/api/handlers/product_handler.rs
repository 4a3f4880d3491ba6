//! Product handlers (public catalog).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateProduct, ProductResponse, UpdateProduct};
use crate::errors::AppResult;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "List of all products", body = Vec<ProductResponse>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.product_service.list_products().await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Product name already exists")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// Update a product by ID
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product name already exists")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProduct>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.product_service.update_product(id, payload).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
