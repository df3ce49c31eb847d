//! Curio Server — collections catalog backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use curio_core::config::AppConfig;
use curio_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("CURIO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Curio v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = curio_database::connection::DatabasePool::connect(&config.database).await?;
    curio_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Step 2: Object store ─────────────────────────────────────
    tracing::info!(provider = %config.storage.provider, "Initializing object store");
    let object_store = curio_storage::build_store(&config.storage).await?;

    // ── Step 3: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(curio_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let collection_repo = Arc::new(
        curio_database::repositories::collection::CollectionRepository::new(db_pool.clone()),
    );
    let item_repo = Arc::new(curio_database::repositories::item::ItemRepository::new(
        db_pool.clone(),
    ));
    let category_repo = Arc::new(
        curio_database::repositories::category::CategoryRepository::new(db_pool.clone()),
    );

    // ── Step 4: Auth subsystem ───────────────────────────────────
    tracing::info!("Initializing authentication system");
    let users: Arc<dyn curio_auth::store::UserStore> = user_repo.clone();
    let password_hasher = Arc::new(curio_auth::password::PasswordHasher::new());
    let password_validator = Arc::new(curio_auth::password::PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(curio_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = curio_auth::jwt::JwtDecoder::new(&config.auth);
    let token_guard = Arc::new(curio_auth::guard::TokenGuard::new(
        jwt_decoder,
        Arc::clone(&users),
    ));
    let authenticator = Arc::new(curio_auth::strategy::LocalAuthenticator::new(
        curio_auth::strategy::CredentialValidator::new(
            Arc::clone(&users),
            Arc::clone(&password_hasher),
        ),
    ));

    // ── Step 5: Admin bootstrap ──────────────────────────────────
    if let Some(email) = &config.auth.bootstrap_admin_email {
        if user_repo.promote_admin(email).await? {
            tracing::info!(email = %email, "Bootstrap admin promoted");
        } else {
            tracing::warn!(email = %email, "Bootstrap admin email not found; skipping");
        }
    }

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = curio_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool,
        object_store,
        users,
        password_hasher,
        password_validator,
        authenticator,
        jwt_encoder,
        token_guard,
        user_repo,
        collection_repo,
        item_repo,
        category_repo,
    };

    let app = curio_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Curio server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Curio server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
