//! Authentication and role-enforcement middleware.
//!
//! Two gates run in sequence on protected routes: the authentication gate
//! resolves a bearer token to a principal (or rejects with 401), and the
//! role gate compares that principal's role against the route's requirement
//! (or rejects with 403). Neither gate touches resource data.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserRole;
use crate::errors::{AppError, AppResult};

/// Authenticated principal extracted from a verified token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check if the principal has admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Raw bearer token the principal presented, kept for logout.
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

/// Pull the bearer token out of the Authorization header, if present.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
}

/// Authentication gate.
///
/// Extracts and verifies the bearer token, then injects the resolved
/// `CurrentUser` (and the raw token) into the request extensions. Every
/// verification failure surfaces as the same generic 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer(request.headers())
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let claims = state.token_service.verify(&token).await?;

    let current_user = CurrentUser {
        id: claims.sub,
        email: claims.email,
        role: UserRole::from(claims.role.as_str()),
    };

    request.extensions_mut().insert(current_user);
    request.extensions_mut().insert(BearerToken(token));

    Ok(next.run(request).await)
}

/// Role gate for admin-only route groups.
///
/// Must be layered inside `auth_middleware`. A missing principal here means
/// the gates were wired in the wrong order, which is a server fault, not a
/// client error.
pub async fn require_admin_middleware(request: Request, next: Next) -> Result<Response, AppError> {
    let user = request.extensions().get::<CurrentUser>().ok_or_else(|| {
        AppError::internal("role gate reached without an authenticated principal")
    })?;

    if user.is_admin() {
        Ok(next.run(request).await)
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require admin role inside a handler, returns Forbidden if not admin.
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_token_from_bearer_header() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn admin_check_is_exact() {
        let admin = CurrentUser {
            id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            role: UserRole::Admin,
        };
        let user = CurrentUser {
            id: Uuid::new_v4(),
            email: "u@example.com".to_string(),
            role: UserRole::User,
        };

        assert!(require_admin(&admin).is_ok());
        assert!(matches!(
            require_admin(&user),
            Err(AppError::Forbidden)
        ));
    }
}
