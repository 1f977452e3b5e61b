use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of in-memory cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Path to SQLite database file (default: "faculty.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// PostgreSQL connection URL (default: "postgres://localhost/faculty")
    /// Note: Only used when the `postgres` feature is enabled.
    #[allow(dead_code)]
    pub database_url: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `SQLITE_PATH` - SQLite database path (default: "faculty.db")
    /// - `DATABASE_URL` - PostgreSQL connection URL (default: "postgres://localhost/faculty")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "faculty.db".to_string()),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "postgres://localhost/faculty".to_string()),
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
