//! Cached repository decorator.
//!
//! [`CachedUserRepository`] wraps a durable `UserRepository` with a `Cache`:
//!
//! - **Writes**: Persist to the repository, then write the fresh record to the cache
//! - **Reads**: Check cache first, on miss fetch from the repository and repair
//!   the cache in a detached task
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("birthdays.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let store = CachedUserRepository::new(repo, cache, Duration::from_secs(600))
//!     .with_repair_timeout(Duration::from_millis(1000));
//! ```

mod user;

pub use user::CachedUserRepository;
