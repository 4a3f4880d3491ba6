//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, category_handler, product_handler, user_handler};
use crate::domain::{
    CategoryResponse, CreateCategory, CreateProduct, ProductResponse, UpdateCategory,
    UpdateProduct, UpdateUser, UserResponse, UserRole,
};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Tienda API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tienda API",
        version = "0.1.0",
        description = "Store REST API with JWT authentication and role-based access",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::me,
        auth_handler::logout,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Product endpoints
        product_handler::list_products,
        product_handler::create_product,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
        // Category endpoints
        category_handler::list_categories,
        category_handler::create_category,
        category_handler::get_category,
        category_handler::update_category,
        category_handler::delete_category,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            UpdateUser,
            ProductResponse,
            CreateProduct,
            UpdateProduct,
            CategoryResponse,
            CreateCategory,
            UpdateCategory,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration, login, and session management"),
        (name = "Users", description = "User management operations"),
        (name = "Products", description = "Public product catalog"),
        (name = "Categories", description = "Category management (admin)")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /login"))
                        .build(),
                ),
            );
        }
    }
}
