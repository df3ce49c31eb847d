//! Email/password authentication strategy with blocked-user enforcement.

use curio_core::result::AppResult;
use curio_entity::user::User;

use super::validator::CredentialValidator;

/// The classified result of a login attempt.
///
/// Created and consumed within a single request; never stored.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Credentials verified and the account is in good standing.
    Authenticated(User),
    /// The attempt was rejected.
    Rejected(AuthRejection),
}

/// Why a login attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// Unknown email or wrong password — deliberately not distinguished.
    InvalidCredentials,
    /// Credentials were correct but the account is blocked.
    Blocked,
}

/// Orchestrates credential validation and the blocked-user policy.
#[derive(Clone)]
pub struct LocalAuthenticator {
    validator: CredentialValidator,
}

impl LocalAuthenticator {
    /// Creates a new authenticator over the given credential validator.
    pub fn new(validator: CredentialValidator) -> Self {
        Self { validator }
    }

    /// Authenticates an email/password pair.
    ///
    /// The blocked-account check runs strictly AFTER credential
    /// verification: a caller who has not proven the credential must never
    /// learn that the account is blocked. Store faults propagate as `Err`,
    /// never as a rejection.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let Some(user) = self.validator.validate(email, password).await? else {
            return Ok(AuthOutcome::Rejected(AuthRejection::InvalidCredentials));
        };

        if user.is_blocked {
            return Ok(AuthOutcome::Rejected(AuthRejection::Blocked));
        }

        Ok(AuthOutcome::Authenticated(user))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::password::PasswordHasher;
    use crate::testing::{InMemoryUsers, user_with_password};

    fn authenticator_with(users: Vec<User>) -> LocalAuthenticator {
        LocalAuthenticator::new(CredentialValidator::new(
            Arc::new(InMemoryUsers::with_users(users)),
            Arc::new(PasswordHasher::new()),
        ))
    }

    #[tokio::test]
    async fn test_active_user_with_correct_secret_authenticates() {
        let user = user_with_password("alice@example.com", "s3cr3t", false);
        let auth = authenticator_with(vec![user.clone()]);

        match auth.authenticate("alice@example.com", "s3cr3t").await.unwrap() {
            AuthOutcome::Authenticated(u) => assert_eq!(u.id, user.id),
            other => panic!("expected Authenticated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid_credentials() {
        let auth = authenticator_with(vec![]);

        match auth.authenticate("bob@example.com", "anything").await.unwrap() {
            AuthOutcome::Rejected(AuthRejection::InvalidCredentials) => {}
            other => panic!("expected InvalidCredentials, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blocked_user_with_correct_secret_is_rejected_as_blocked() {
        let user = user_with_password("alice@example.com", "s3cr3t", true);
        let auth = authenticator_with(vec![user]);

        match auth.authenticate("alice@example.com", "s3cr3t").await.unwrap() {
            AuthOutcome::Rejected(AuthRejection::Blocked) => {}
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blocked_user_with_wrong_secret_never_leaks_blocked_status() {
        let user = user_with_password("alice@example.com", "s3cr3t", true);
        let auth = authenticator_with(vec![user]);

        match auth.authenticate("alice@example.com", "wrong").await.unwrap() {
            AuthOutcome::Rejected(AuthRejection::InvalidCredentials) => {}
            other => panic!("expected InvalidCredentials, got {other:?}"),
        }
    }
}
