//! Auth handlers — login, register, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use curio_auth::strategy::{AuthOutcome, AuthRejection};
use curio_core::error::AppError;
use curio_entity::user::CreateUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/login
///
/// The response never distinguishes an unknown email from a wrong password;
/// a blocked account is only disclosed (403) after the credential proved
/// out. The specific rejection is kept in the logs.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    match state
        .authenticator
        .authenticate(&req.email, &req.password)
        .await?
    {
        AuthOutcome::Authenticated(user) => {
            let issued = state.jwt_encoder.issue(&user)?;
            tracing::info!(user_id = %user.id, "Login successful");

            Ok(Json(ApiResponse::ok(LoginResponse {
                access_token: issued.token,
                expires_at: issued.expires_at,
                user: UserResponse::from(user),
            })))
        }
        AuthOutcome::Rejected(rejection) => {
            tracing::warn!(email = %req.email, reason = ?rejection, "Login rejected");
            Err(match rejection {
                AuthRejection::InvalidCredentials => {
                    AppError::unauthorized("Invalid email or password")
                }
                AuthRejection::Blocked => AppError::forbidden("Account is blocked"),
            })
        }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LoginResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    state.password_validator.validate(&req.password)?;

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&CreateUser {
            email: req.email,
            password_hash,
            display_name: req.display_name,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    let issued = state.jwt_encoder.issue(&user)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(LoginResponse {
            access_token: issued.token,
            expires_at: issued.expires_at,
            user: UserResponse::from(user),
        })),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state
        .users
        .find_by_id(current.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
