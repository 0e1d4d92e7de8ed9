//! User-facing operations.
//!
//! [`UserService`] validates input, talks to the record store and turns
//! every failure into a [`UserError`] the transport can render.

use std::sync::Arc;

use birthdays_core::storage::UserRepository;
use birthdays_core::users::{
    birthday_message, parse_date_of_birth, validate_username, Clock, User, UserError,
};

/// Stores users and greets them.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Creates or replaces the date of birth for `username`.
    ///
    /// Input is validated before any I/O. `date_of_birth` must be a
    /// `YYYY-MM-DD` date that is neither in the future nor implausibly old.
    pub async fn upsert(&self, username: &str, date_of_birth: &str) -> Result<(), UserError> {
        validate_username(username)?;
        let today = self.clock.now().date();
        let date_of_birth = parse_date_of_birth(date_of_birth, today)?;

        let user = User::new(username, date_of_birth);
        self.repo.upsert_user(&user).await.map_err(|err| {
            tracing::error!(%username, error = %err, "Failed to upsert user");
            UserError::Unexpected
        })?;

        tracing::debug!(%username, %date_of_birth, "User upserted");
        Ok(())
    }

    /// Returns the birthday greeting for `username`.
    pub async fn read(&self, username: &str) -> Result<String, UserError> {
        validate_username(username)?;

        let user = self
            .repo
            .get_user(username)
            .await
            .map_err(|err| {
                tracing::error!(%username, error = %err, "Failed to read user");
                UserError::Unexpected
            })?
            .ok_or(UserError::NotFound)?;

        Ok(birthday_message(&user, self.clock.as_ref()))
    }
}
