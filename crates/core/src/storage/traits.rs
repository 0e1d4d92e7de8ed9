use async_trait::async_trait;

use crate::users::User;

use super::Result;

/// Repository for user records, keyed by username.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by username. Returns `Ok(None)` if no such user exists.
    async fn get_user(&self, username: &str) -> Result<Option<User>>;

    /// Inserts the user, or replaces the date of birth of an existing one.
    async fn upsert_user(&self, user: &User) -> Result<()>;
}
