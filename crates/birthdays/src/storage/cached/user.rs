//! Cached user repository decorator.
//!
//! Write-through on upsert, cache-first on read with a detached repair of the
//! cache whenever the durable table had to answer.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use birthdays_core::cache::{deserialize_user, serialize_user, user_key, Cache};
use birthdays_core::storage::{RepositoryError, Result, UserRepository};
use birthdays_core::users::User;

/// Upper bound on a single background cache repair.
const DEFAULT_REPAIR_TIMEOUT: Duration = Duration::from_millis(1000);

/// Cached user repository decorator.
///
/// The durable repository is the source of truth. The cache holds a
/// disposable copy of each record that expires after `ttl`.
///
/// # Type Parameters
///
/// * `R` - The durable repository implementation
/// * `C` - The cache implementation
pub struct CachedUserRepository<R, C>
where
    R: UserRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
    repair_timeout: Duration,
}

impl<R, C> CachedUserRepository<R, C>
where
    R: UserRepository,
    C: Cache,
{
    /// Creates a new cached user repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The durable repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for cached records
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
            repair_timeout: DEFAULT_REPAIR_TIMEOUT,
        }
    }

    /// Sets how long a background cache repair may run before it is abandoned.
    pub fn with_repair_timeout(mut self, repair_timeout: Duration) -> Self {
        self.repair_timeout = repair_timeout;
        self
    }
}

impl<R, C> CachedUserRepository<R, C>
where
    R: UserRepository,
    C: Cache + 'static,
{
    /// Repopulates the cache without holding up the caller.
    ///
    /// The task outlives the request that spawned it.
    fn spawn_repair(&self, key: String, user: &User) {
        let bytes = match serialize_user(user) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(username = %user.username, error = %err, "Failed to serialize user for cache repair");
                return;
            }
        };

        let cache = Arc::clone(&self.cache);
        let ttl = self.ttl;
        let repair_timeout = self.repair_timeout;

        tokio::spawn(async move {
            match tokio::time::timeout(repair_timeout, cache.set(&key, &bytes, Some(ttl))).await {
                Ok(Ok(())) => tracing::trace!(%key, "Cache repaired"),
                Ok(Err(err)) => tracing::warn!(%key, error = %err, "Failed to repair cache"),
                Err(_) => tracing::warn!(
                    %key,
                    timeout_ms = repair_timeout.as_millis() as u64,
                    "Cache repair timed out"
                ),
            }
        });
    }
}

#[async_trait]
impl<R, C> UserRepository for CachedUserRepository<R, C>
where
    R: UserRepository + 'static,
    C: Cache + 'static,
{
    async fn get_user(&self, username: &str) -> Result<Option<User>> {
        let cache_key = user_key(username);

        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_user(&bytes) {
                Ok(user) => {
                    tracing::trace!(%username, "Cache hit for user");
                    return Ok(Some(user));
                }
                Err(err) => {
                    tracing::warn!(%username, error = %err, "Cache entry deserialization failed");
                    if let Err(err) = self.cache.delete(&cache_key).await {
                        tracing::warn!(%username, error = %err, "Failed to delete corrupt cache entry");
                    }
                }
            },
            Ok(None) => tracing::trace!(%username, "Cache miss for user"),
            Err(err) => {
                tracing::error!(%username, error = %err, "Cache read failed");
                return Err(RepositoryError::Cache(err));
            }
        }

        let user = self.repository.get_user(username).await?;

        if let Some(ref u) = user {
            self.spawn_repair(cache_key, u);
        }

        Ok(user)
    }

    async fn upsert_user(&self, user: &User) -> Result<()> {
        self.repository.upsert_user(user).await?;

        let bytes =
            serialize_user(user).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Err(err) = self
            .cache
            .set(&user_key(&user.username), &bytes, Some(self.ttl))
            .await
        {
            tracing::error!(username = %user.username, error = %err, "Failed to write user to cache");
            return Err(RepositoryError::Cache(err));
        }

        tracing::debug!(username = %user.username, "User written through to cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    use birthdays_core::cache::{CacheError, Result as CacheResult};

    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryRepository;

    // Mock repository that tracks calls
    #[derive(Default)]
    struct MockUserRepository {
        users: RwLock<HashMap<String, User>>,
        get_calls: AtomicUsize,
        upsert_calls: AtomicUsize,
        fail_upsert: AtomicBool,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn get_user(&self, username: &str) -> Result<Option<User>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.users.read().await.get(username).cloned())
        }

        async fn upsert_user(&self, user: &User) -> Result<()> {
            self.upsert_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_upsert.load(Ordering::SeqCst) {
                return Err(RepositoryError::QueryFailed("disk full".to_string()));
            }
            self.users
                .write()
                .await
                .insert(user.username.clone(), user.clone());
            Ok(())
        }
    }

    // Mock cache with failure switches
    #[derive(Default)]
    struct MockCache {
        store: RwLock<HashMap<String, Vec<u8>>>,
        set_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        fail_get: AtomicBool,
        fail_set: AtomicBool,
        set_delay: Option<Duration>,
    }

    impl MockCache {
        async fn raw(&self, key: &str) -> Option<Vec<u8>> {
            self.store.read().await.get(key).cloned()
        }

        async fn put_raw(&self, key: &str, value: &[u8]) {
            self.store
                .write()
                .await
                .insert(key.to_string(), value.to_vec());
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            if self.fail_get.load(Ordering::SeqCst) {
                return Err(CacheError::ConnectionFailed("refused".to_string()));
            }
            Ok(self.store.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            self.set_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.set_delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_set.load(Ordering::SeqCst) {
                return Err(CacheError::OperationFailed("read only".to_string()));
            }
            self.put_raw(key, value).await;
            Ok(())
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.store.write().await.remove(key);
            Ok(())
        }
    }

    fn apple() -> User {
        User::new("apple", NaiveDate::from_ymd_opt(2000, 1, 2).unwrap())
    }

    fn setup(
        cache: MockCache,
    ) -> (
        Arc<MockUserRepository>,
        Arc<MockCache>,
        CachedUserRepository<MockUserRepository, MockCache>,
    ) {
        let repo = Arc::new(MockUserRepository::default());
        let cache = Arc::new(cache);
        let store =
            CachedUserRepository::new(Arc::clone(&repo), Arc::clone(&cache), Duration::from_secs(600));
        (repo, cache, store)
    }

    /// Polls until the detached repair has landed.
    async fn wait_for_key(cache: &MockCache, key: &str) -> bool {
        for _ in 0..100 {
            if cache.raw(key).await.is_some() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_upsert_writes_through() {
        let (repo, cache, store) = setup(MockCache::default());

        store.upsert_user(&apple()).await.unwrap();

        assert_eq!(repo.upsert_calls.load(Ordering::SeqCst), 1);
        let bytes = cache.raw(&user_key("apple")).await.unwrap();
        assert_eq!(deserialize_user(&bytes).unwrap(), apple());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_repository() {
        let (repo, cache, store) = setup(MockCache::default());
        cache
            .put_raw(&user_key("apple"), &serialize_user(&apple()).unwrap())
            .await;

        let user = store.get_user("apple").await.unwrap();

        assert_eq!(user, Some(apple()));
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cache_miss_falls_back_and_repairs() {
        let (repo, cache, store) = setup(MockCache::default());
        repo.upsert_user(&apple()).await.unwrap();

        let user = store.get_user("apple").await.unwrap();

        assert_eq!(user, Some(apple()));
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
        assert!(wait_for_key(&cache, &user_key("apple")).await);

        // Second read is served from the repaired cache
        store.get_user("apple").await.unwrap();
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_user_is_none_and_not_cached() {
        let (repo, cache, store) = setup(MockCache::default());

        let user = store.get_user("nobody").await.unwrap();

        assert!(user.is_none());
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
        tokio::task::yield_now().await;
        assert_eq!(cache.set_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_deleted_and_repaired() {
        let (repo, cache, store) = setup(MockCache::default());
        repo.upsert_user(&apple()).await.unwrap();
        cache.put_raw(&user_key("apple"), b"{not json").await;

        let user = store.get_user("apple").await.unwrap();

        assert_eq!(user, Some(apple()));
        assert_eq!(cache.delete_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);

        assert!(wait_for_key(&cache, &user_key("apple")).await);
        let bytes = cache.raw(&user_key("apple")).await.unwrap();
        assert_eq!(deserialize_user(&bytes).unwrap(), apple());
    }

    #[tokio::test]
    async fn test_cache_read_error_skips_repository() {
        let cache = MockCache::default();
        cache.fail_get.store(true, Ordering::SeqCst);
        let (repo, _cache, store) = setup(cache);

        let result = store.get_user("apple").await;

        assert!(matches!(result, Err(RepositoryError::Cache(_))));
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cache_write_error_keeps_durable_row() {
        let cache = MockCache::default();
        cache.fail_set.store(true, Ordering::SeqCst);
        let (repo, _cache, store) = setup(cache);

        let result = store.upsert_user(&apple()).await;

        assert!(matches!(result, Err(RepositoryError::Cache(_))));
        assert_eq!(repo.get_user("apple").await.unwrap(), Some(apple()));
    }

    #[tokio::test]
    async fn test_durable_write_error_leaves_cache_untouched() {
        let (repo, cache, store) = setup(MockCache::default());
        repo.fail_upsert.store(true, Ordering::SeqCst);

        let result = store.upsert_user(&apple()).await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
        assert_eq!(cache.set_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repair_failure_does_not_fail_read() {
        let cache = MockCache::default();
        cache.fail_set.store(true, Ordering::SeqCst);
        let (repo, _cache, store) = setup(cache);
        repo.upsert_user(&apple()).await.unwrap();

        let user = store.get_user("apple").await.unwrap();

        assert_eq!(user, Some(apple()));
    }

    #[tokio::test]
    async fn test_slow_repair_is_abandoned() {
        let cache = MockCache {
            set_delay: Some(Duration::from_millis(200)),
            ..Default::default()
        };
        let (repo, cache, store) = setup(cache);
        let store = store.with_repair_timeout(Duration::from_millis(10));
        repo.upsert_user(&apple()).await.unwrap();

        let started = std::time::Instant::now();
        let user = store.get_user("apple").await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(200));
        assert_eq!(user, Some(apple()));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(cache.raw(&user_key("apple")).await.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_is_visible_through_cache() {
        let repo = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(MemoryCache::new(100));
        let store = CachedUserRepository::new(repo.clone(), cache, Duration::from_secs(600));

        store.upsert_user(&apple()).await.unwrap();
        let updated = User::new("apple", NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
        store.upsert_user(&updated).await.unwrap();

        assert_eq!(store.get_user("apple").await.unwrap(), Some(updated.clone()));
        assert_eq!(repo.get_user("apple").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_expired_entry_falls_back_to_repository() {
        let repo = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(MemoryCache::new(100));
        let store = CachedUserRepository::new(repo, cache.clone(), Duration::from_millis(50));

        store.upsert_user(&apple()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(cache.get(&user_key("apple")).await.unwrap().is_none());

        assert_eq!(store.get_user("apple").await.unwrap(), Some(apple()));
    }
}
