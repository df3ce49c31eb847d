//! Bearer-token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use curio_core::config::auth::AuthConfig;

use super::claims::Claims;

/// Why a presented token failed validation.
///
/// The distinction is internal (logged by the guard); callers surface a
/// single generic unauthenticated error either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's expiration has passed.
    #[error("token has expired")]
    Expired,
    /// Bad signature, malformed token, or otherwise unverifiable.
    #[error("token is invalid")]
    Invalid,
}

/// Validates bearer tokens against the process-wide signing secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Issuer and guard share a clock; no skew allowance, so a token is
        // rejected the moment its window closes.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning its claims.
    ///
    /// Checks signature validity and expiration.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use crate::testing::{test_auth_config, user_fixture};
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    #[test]
    fn test_issue_then_decode() {
        let config = test_auth_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user = user_fixture("alice@example.com", "unused", false);

        let issued = encoder.issue(&user).unwrap();
        let claims = decoder.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, config.token_ttl_seconds as i64);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_rejects_foreign_secret() {
        let config = test_auth_config();
        let mut other = test_auth_config();
        other.jwt_secret = "a-completely-different-secret".to_string();

        let issued = JwtEncoder::new(&other)
            .issue(&user_fixture("alice@example.com", "unused", false))
            .unwrap();

        assert_eq!(
            JwtDecoder::new(&config).decode(&issued.token),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_rejects_tampered_token() {
        let config = test_auth_config();
        let issued = JwtEncoder::new(&config)
            .issue(&user_fixture("alice@example.com", "unused", false))
            .unwrap();

        let mut tampered = issued.token.clone();
        tampered.push('x');
        assert_eq!(
            JwtDecoder::new(&config).decode(&tampered),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        let decoder = JwtDecoder::new(&test_auth_config());
        assert_eq!(decoder.decode("not.a.token"), Err(TokenError::Invalid));
        assert_eq!(decoder.decode(""), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expiry_window() {
        let config = test_auth_config();
        let decoder = JwtDecoder::new(&config);
        let user = user_fixture("alice@example.com", "unused", false);
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let now = Utc::now().timestamp();

        // Still inside the validity window: accepted.
        let live = Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now - 3590,
            exp: now + 10,
        };
        let token = encode(&Header::default(), &live, &key).unwrap();
        assert!(decoder.decode(&token).is_ok());

        // Past the window: rejected as expired.
        let stale = Claims {
            sub: user.id,
            email: user.email,
            iat: now - 3700,
            exp: now - 10,
        };
        let token = encode(&Header::default(), &stale, &key).unwrap();
        assert_eq!(decoder.decode(&token), Err(TokenError::Expired));
    }
}
