//! Per-request bearer-token guard.

use std::sync::Arc;

use thiserror::Error;

use curio_core::error::AppError;
use curio_entity::user::User;

use crate::jwt::{JwtDecoder, TokenError};
use crate::store::UserStore;

/// Why a protected request was rejected by the guard.
///
/// The specific variant is logged internally; the HTTP response carries a
/// generic unauthenticated (401) or forbidden (403) error so the sub-case
/// never leaks to the caller.
#[derive(Debug, Error)]
pub enum GuardError {
    /// No bearer-token carrier on the request.
    #[error("missing bearer token")]
    Missing,
    /// Bad signature, malformed token, or a subject no longer in the store.
    #[error("invalid bearer token")]
    Invalid,
    /// The token's validity window has passed.
    #[error("expired bearer token")]
    Expired,
    /// The subject's account was blocked after the token was issued.
    #[error("account is blocked")]
    Blocked,
    /// The credential store could not be reached.
    #[error(transparent)]
    Store(AppError),
}

impl From<GuardError> for AppError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Missing | GuardError::Invalid | GuardError::Expired => {
                AppError::unauthorized("Invalid or missing authentication token")
            }
            GuardError::Blocked => AppError::forbidden("Account is blocked"),
            GuardError::Store(e) => e,
        }
    }
}

/// Validates the bearer token presented on a protected request and resolves
/// it to a live principal.
///
/// The token vouches only for a past successful authentication, never for
/// current account standing: the guard re-reads the user from the store on
/// every request, so an account blocked after issuance is rejected on its
/// very next use even while the token is unexpired and correctly signed.
#[derive(Clone)]
pub struct TokenGuard {
    decoder: JwtDecoder,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for TokenGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGuard")
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl TokenGuard {
    /// Creates a new guard over the given decoder and store.
    pub fn new(decoder: JwtDecoder, users: Arc<dyn UserStore>) -> Self {
        Self { decoder, users }
    }

    /// Authorizes a request from its `Authorization` header value.
    ///
    /// Steps, in order: carrier present → signature and expiration valid →
    /// subject resolves to a live user → user not blocked.
    pub async fn authorize(&self, authorization: Option<&str>) -> Result<User, GuardError> {
        let header = authorization.ok_or(GuardError::Missing)?;
        let token = header.strip_prefix("Bearer ").ok_or(GuardError::Missing)?;

        let claims = self.decoder.decode(token).map_err(|e| match e {
            TokenError::Expired => GuardError::Expired,
            TokenError::Invalid => GuardError::Invalid,
        })?;

        // Fresh lookup: never trust a principal snapshot embedded in the token.
        let user = self
            .users
            .find_by_id(claims.sub)
            .await
            .map_err(GuardError::Store)?
            .ok_or(GuardError::Invalid)?;

        if user.is_blocked {
            return Err(GuardError::Blocked);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::{Claims, JwtEncoder};
    use crate::testing::{InMemoryUsers, test_auth_config, user_fixture};
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn guard_with(store: Arc<InMemoryUsers>) -> TokenGuard {
        TokenGuard::new(JwtDecoder::new(&test_auth_config()), store)
    }

    #[tokio::test]
    async fn test_valid_token_resolves_principal() {
        let user = user_fixture("alice@example.com", "hash", false);
        let store = Arc::new(InMemoryUsers::with_users(vec![user.clone()]));
        let guard = guard_with(Arc::clone(&store));
        let issued = JwtEncoder::new(&test_auth_config()).issue(&user).unwrap();

        let header = format!("Bearer {}", issued.token);
        let resolved = guard.authorize(Some(&header)).await.unwrap();
        assert_eq!(resolved.id, user.id);
    }

    #[tokio::test]
    async fn test_missing_carrier() {
        let guard = guard_with(Arc::new(InMemoryUsers::default()));

        assert!(matches!(
            guard.authorize(None).await,
            Err(GuardError::Missing)
        ));
        assert!(matches!(
            guard.authorize(Some("Token abc")).await,
            Err(GuardError::Missing)
        ));
    }

    #[tokio::test]
    async fn test_tampered_token_is_invalid() {
        let user = user_fixture("alice@example.com", "hash", false);
        let store = Arc::new(InMemoryUsers::with_users(vec![user.clone()]));
        let guard = guard_with(store);
        let issued = JwtEncoder::new(&test_auth_config()).issue(&user).unwrap();

        let header = format!("Bearer {}x", issued.token);
        assert!(matches!(
            guard.authorize(Some(&header)).await,
            Err(GuardError::Invalid)
        ));
    }

    #[tokio::test]
    async fn test_expired_token() {
        let user = user_fixture("alice@example.com", "hash", false);
        let store = Arc::new(InMemoryUsers::with_users(vec![user.clone()]));
        let guard = guard_with(store);

        let config = test_auth_config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            email: user.email,
            iat: now - 7200,
            exp: now - 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let header = format!("Bearer {token}");
        assert!(matches!(
            guard.authorize(Some(&header)).await,
            Err(GuardError::Expired)
        ));
    }

    #[tokio::test]
    async fn test_user_blocked_after_issuance_is_rejected() {
        let user = user_fixture("alice@example.com", "hash", false);
        let store = Arc::new(InMemoryUsers::with_users(vec![user.clone()]));
        let guard = guard_with(Arc::clone(&store));
        let issued = JwtEncoder::new(&test_auth_config()).issue(&user).unwrap();
        let header = format!("Bearer {}", issued.token);

        // Accepted while in good standing.
        assert!(guard.authorize(Some(&header)).await.is_ok());

        // Blocked afterwards: the unexpired, correctly signed token no
        // longer gets through.
        store.set_blocked(user.id, true);
        assert!(matches!(
            guard.authorize(Some(&header)).await,
            Err(GuardError::Blocked)
        ));
    }

    #[tokio::test]
    async fn test_deleted_subject_is_invalid() {
        let user = user_fixture("alice@example.com", "hash", false);
        let guard = guard_with(Arc::new(InMemoryUsers::default()));
        let issued = JwtEncoder::new(&test_auth_config()).issue(&user).unwrap();

        let header = format!("Bearer {}", issued.token);
        assert!(matches!(
            guard.authorize(Some(&header)).await,
            Err(GuardError::Invalid)
        ));
    }
}
