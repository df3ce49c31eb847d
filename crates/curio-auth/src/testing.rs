//! Shared fixtures for the crate's unit tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use curio_core::config::auth::AuthConfig;
use curio_core::result::AppResult;
use curio_entity::user::User;

use crate::password::PasswordHasher;
use crate::store::UserStore;

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "unit-test-signing-secret".to_string(),
        token_ttl_seconds: 3600,
        password_min_length: 8,
        bootstrap_admin_email: None,
    }
}

pub fn user_fixture(email: &str, password_hash: &str, is_blocked: bool) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        display_name: None,
        is_admin: false,
        is_blocked,
        created_at: now,
        updated_at: now,
    }
}

pub fn user_with_password(email: &str, password: &str, is_blocked: bool) -> User {
    let hash = PasswordHasher::new().hash_password(password).unwrap();
    user_fixture(email, &hash, is_blocked)
}

/// In-memory credential store backing the unit tests.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: RwLock<Vec<User>>,
}

impl InMemoryUsers {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn set_blocked(&self, id: Uuid, blocked: bool) {
        let mut users = self.users.write().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.is_blocked = blocked;
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
