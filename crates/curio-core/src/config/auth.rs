//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The signing secret is process-wide, read-only state: it is loaded once
/// at startup and shared (behind `Arc<AppConfig>`) by the token issuer and
/// the token guard. Rotating it invalidates every outstanding token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Required; no default.
    pub jwt_secret: String,
    /// Access token TTL in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// If set, the user with this email is promoted to admin at startup.
    #[serde(default)]
    pub bootstrap_admin_email: Option<String>,
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_password_min() -> usize {
    8
}
