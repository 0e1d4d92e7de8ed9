//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The record store is assembled from a durable repository
//! and a cache, selected at compile time via feature flags.

use std::sync::Arc;

use birthdays_core::storage::UserRepository;
use birthdays_core::users::{Clock, SystemClock};

use crate::config::Config;
use crate::service::UserService;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Creates a new AppState around an already assembled record store.
    pub fn build(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repo, clock)),
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedUserRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cached_user_repo = Arc::new(
                CachedUserRepository::new(sqlite_repo, memory_cache, config.cache_ttl())
                    .with_repair_timeout(config.cache_repair_timeout()),
            );

            Ok(Self::build(cached_user_repo, Arc::new(SystemClock)))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedUserRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let cached_user_repo = Arc::new(
                CachedUserRepository::new(sqlite_repo, redis_cache, config.cache_ttl())
                    .with_repair_timeout(config.cache_repair_timeout()),
            );

            Ok(Self::build(cached_user_repo, Arc::new(SystemClock)))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedUserRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local runs without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cached_user_repo = Arc::new(
                CachedUserRepository::new(inmemory_repo, memory_cache, config.cache_ttl())
                    .with_repair_timeout(config.cache_repair_timeout()),
            );

            Ok(Self::build(cached_user_repo, Arc::new(SystemClock)))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedUserRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let cached_user_repo = Arc::new(
                CachedUserRepository::new(inmemory_repo, redis_cache, config.cache_ttl())
                    .with_repair_timeout(config.cache_repair_timeout()),
            );

            Ok(Self::build(cached_user_repo, Arc::new(SystemClock)))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
