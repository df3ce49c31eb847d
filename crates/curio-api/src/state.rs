//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use curio_auth::guard::TokenGuard;
use curio_auth::jwt::JwtEncoder;
use curio_auth::password::{PasswordHasher, PasswordValidator};
use curio_auth::store::UserStore;
use curio_auth::strategy::LocalAuthenticator;
use curio_core::config::AppConfig;
use curio_core::traits::ObjectStore;
use curio_database::repositories::category::CategoryRepository;
use curio_database::repositories::collection::CollectionRepository;
use curio_database::repositories::item::ItemRepository;
use curio_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration (immutable after startup).
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Object store for uploaded assets.
    pub object_store: Arc<dyn ObjectStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Credential store view used by the auth subsystem.
    pub users: Arc<dyn UserStore>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    pub password_validator: Arc<PasswordValidator>,
    /// Login authentication strategy.
    pub authenticator: Arc<LocalAuthenticator>,
    /// Bearer-token issuer.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Bearer-token guard for protected routes.
    pub token_guard: Arc<TokenGuard>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Collection repository.
    pub collection_repo: Arc<CollectionRepository>,
    /// Item repository.
    pub item_repo: Arc<ItemRepository>,
    /// Category repository.
    pub category_repo: Arc<CategoryRepository>,
}
