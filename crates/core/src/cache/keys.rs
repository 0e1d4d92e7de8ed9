/// Namespace shared by every user record in the cache.
pub const USER_KEY_PREFIX: &str = "user_service:username:";

/// Returns the cache key for a user record.
///
/// # Examples
///
/// ```
/// use birthdays_core::cache::user_key;
///
/// assert_eq!(user_key("apple"), "user_service:username:apple");
/// ```
pub fn user_key(username: &str) -> String {
    format!("{USER_KEY_PREFIX}{username}")
}
