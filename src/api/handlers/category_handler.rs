//! Category handlers.
//!
//! CRUD routes are admin-gated at the router; the read-only listing at
//! `/listadeCategorias` is open to any authenticated user.

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
use crate::domain::{CategoryResponse, CreateCategory, UpdateCategory};
use crate::errors::AppResult;

/// Create category CRUD routes (admin only)
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// List all categories
#[utoipa::path(
    get,
    path = "/listadeCategorias",
    tag = "Categories",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of all categories", body = Vec<CategoryResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Create a new category (admin only)
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    security(("bearer_auth" = [])),
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let category = state.category_service.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// Get a category by ID (admin only)
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.category_service.get_category(id).await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// Update a category by ID (admin only)
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCategory>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.category_service.update_category(id, payload).await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// Delete a category by ID (admin only)
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.category_service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
