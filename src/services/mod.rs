//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
mod category_service;
pub mod container;
mod product_service;
mod token_service;
mod user_service;

pub use container::Services;

pub use auth_service::{AuthService, Authenticator};
pub use category_service::{CategoryCatalog, CategoryService};
pub use product_service::{ProductCatalog, ProductService};
pub use token_service::{Claims, TokenIssuer, TokenResponse, TokenService};
pub use user_service::{UserManager, UserService};
