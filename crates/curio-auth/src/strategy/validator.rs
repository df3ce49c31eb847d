//! Credential validation against the user store.

use std::sync::Arc;

use curio_core::result::AppResult;
use curio_entity::user::User;

use crate::password::PasswordHasher;
use crate::store::UserStore;

/// Validates an email/password pair against the credential store.
///
/// Read-only: no counters, no lockouts, no writes.
#[derive(Clone)]
pub struct CredentialValidator {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
}

impl CredentialValidator {
    /// Creates a new validator over the given store.
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Looks up the user by email and verifies the password against the
    /// stored hash.
    ///
    /// Returns `Ok(None)` for an unknown email, a wrong password, or empty
    /// inputs — the caller cannot tell these apart, which keeps account
    /// existence undiscoverable. `Err` is reserved for infrastructure
    /// faults (store unreachable, malformed stored hash).
    pub async fn validate(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        if email.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };

        if self.hasher.verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryUsers, user_with_password};

    fn validator_with(users: Vec<User>) -> CredentialValidator {
        CredentialValidator::new(
            Arc::new(InMemoryUsers::with_users(users)),
            Arc::new(PasswordHasher::new()),
        )
    }

    #[tokio::test]
    async fn test_correct_credentials_yield_user() {
        let user = user_with_password("alice@example.com", "s3cr3t", false);
        let validator = validator_with(vec![user.clone()]);

        let found = validator.validate("alice@example.com", "s3cr3t").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let user = user_with_password("alice@example.com", "s3cr3t", false);
        let validator = validator_with(vec![user]);

        let unknown = validator.validate("bob@example.com", "s3cr3t").await.unwrap();
        let wrong = validator.validate("alice@example.com", "nope").await.unwrap();
        assert!(unknown.is_none());
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn test_empty_inputs_fail_validation() {
        let user = user_with_password("alice@example.com", "s3cr3t", false);
        let validator = validator_with(vec![user]);

        assert!(validator.validate("", "s3cr3t").await.unwrap().is_none());
        assert!(
            validator
                .validate("alice@example.com", "")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let user = user_with_password("alice@example.com", "s3cr3t", false);
        let validator = validator_with(vec![user]);

        let found = validator.validate("Alice@Example.com", "s3cr3t").await.unwrap();
        assert!(found.is_some());
    }
}
