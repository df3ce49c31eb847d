//! Route definitions for the Curio HTTP API.
//!
//! All routes are mounted under `/api`. Everything except login, register,
//! and the health check sits behind the `require_auth` middleware stage.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = public_routes().merge(
        protected_routes().layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        )),
    );

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Routes reachable without a bearer token.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/health", get(handlers::health::health_check))
}

/// Routes gated by the token guard.
fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(handlers::auth::me))
        // Collections
        .route(
            "/collections",
            get(handlers::collection::list_collections)
                .post(handlers::collection::create_collection),
        )
        .route(
            "/collections/me",
            get(handlers::collection::list_my_collections),
        )
        .route(
            "/collections/{id}",
            get(handlers::collection::get_collection)
                .patch(handlers::collection::update_collection)
                .delete(handlers::collection::delete_collection),
        )
        // Items
        .route(
            "/collections/{id}/items",
            get(handlers::item::list_items).post(handlers::item::create_item),
        )
        .route(
            "/items/{id}",
            get(handlers::item::get_item)
                .patch(handlers::item::update_item)
                .delete(handlers::item::delete_item),
        )
        // Categories
        .route(
            "/categories",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/categories/{id}",
            delete(handlers::category::delete_category),
        )
        // User administration
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}/block", patch(handlers::user::block_user))
        .route("/users/{id}/unblock", patch(handlers::user::unblock_user))
        .route("/users/{id}/role", patch(handlers::user::change_role))
        .route("/users/{id}", delete(handlers::user::delete_user))
}
