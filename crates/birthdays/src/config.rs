use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used by the in-process cache.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Upper bound for a background cache repair in milliseconds (default: 1,000)
    pub cache_repair_timeout_ms: u64,
    /// Path to SQLite database file (default: "birthdays.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Allowed CORS origins, comma separated, `*` for any (default: "*")
    pub cors_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `CACHE_REPAIR_TIMEOUT_MS` - Background cache repair bound (default: 1,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "birthdays.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CORS_ORIGIN` - Allowed CORS origins, comma separated (default: "*")
    ///
    /// Values that fail to parse fall back to their default. A TTL of 0 is
    /// rejected the same way: the in-process cache would expire every entry
    /// on arrival.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|&ttl| ttl > 0)
                .unwrap_or(600),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            cache_repair_timeout_ms: lookup("CACHE_REPAIR_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "birthdays.db".to_string()),
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            cors_origin: lookup("CORS_ORIGIN")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "*".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the cache repair timeout as a Duration.
    pub fn cache_repair_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_repair_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
