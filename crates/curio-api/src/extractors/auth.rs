//! Identity extractors — read the principal injected by the auth middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use curio_core::error::AppError;

/// The authenticated principal for the current request.
///
/// Inserted into request extensions by the `require_auth` middleware after
/// the token guard has resolved and re-validated the user. Extracting it on
/// a route that is not behind the middleware is a programmer error, not a
/// runtime condition — it surfaces as a 500, never a 401.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The authenticated user's ID.
    pub id: Uuid,
    /// The user's email.
    pub email: String,
    /// Whether the user has administrator privileges.
    pub is_admin: bool,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            AppError::internal("CurrentUser extracted on a route without the auth middleware")
        })
    }
}

/// An authenticated principal that must also be an administrator.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let current = CurrentUser::from_request_parts(parts, state).await?;
        if !current.is_admin {
            return Err(AppError::forbidden("Administrator privileges required"));
        }
        Ok(AdminUser(current))
    }
}
