//! Credential store interface consumed by the auth subsystem.

use async_trait::async_trait;
use uuid::Uuid;

use curio_core::result::AppResult;
use curio_entity::user::User;

/// Read-only view of the user store, as seen by the auth subsystem.
///
/// The store itself lives elsewhere (`curio-database` implements this for
/// its `UserRepository`); the auth subsystem only ever reads from it. A
/// returned `Err` means the store is unreachable — an infrastructure fault,
/// never a rejection outcome.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Look up a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Look up a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}
