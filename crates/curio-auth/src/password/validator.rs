//! Password policy enforcement for new passwords.

use curio_core::config::auth::AuthConfig;
use curio_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Two {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_auth_config;

    #[test]
    fn test_rejects_short_passwords() {
        let validator = PasswordValidator::new(&test_auth_config());
        assert!(validator.validate("abc").is_err());
    }

    #[test]
    fn test_rejects_guessable_passwords() {
        let validator = PasswordValidator::new(&test_auth_config());
        assert!(validator.validate("password").is_err());
    }

    #[test]
    fn test_accepts_reasonable_passwords() {
        let validator = PasswordValidator::new(&test_auth_config());
        assert!(validator.validate("mauve-Teapot-91").is_ok());
    }
}
