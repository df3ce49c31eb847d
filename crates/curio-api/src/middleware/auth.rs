//! Bearer-token guard middleware.
//!
//! The request pipeline for protected routes is an explicit, ordered chain:
//! this stage either continues with an enriched context (the resolved
//! principal in request extensions) or short-circuits with a classified
//! error before any handler logic runs.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use curio_core::error::AppError;

use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Runs the token guard once per protected request.
///
/// On success the resolved principal is inserted into request extensions
/// for the `CurrentUser` extractor. On failure the specific guard sub-case
/// is logged and a generic 401/403 is returned.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let user = match state.token_guard.authorize(authorization.as_deref()).await {
        Ok(user) => user,
        Err(err) => {
            tracing::debug!(
                reason = %err,
                path = %request.uri().path(),
                "Request rejected by token guard"
            );
            return Err(AppError::from(err));
        }
    };

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        email: user.email,
        is_admin: user.is_admin,
    });

    Ok(next.run(request).await)
}
