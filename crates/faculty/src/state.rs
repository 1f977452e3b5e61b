//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the teacher repository as a trait object and
//! supports different backend combinations via feature flags.

use std::sync::Arc;

use faculty_core::storage::TeacherRepository;

use crate::config::Config;
use crate::storage::cached::CachedTeacherRepository;

/// Shared application state.
///
/// Cheap to clone; every clone shares the same repository.
#[derive(Clone)]
pub struct AppState {
    /// Teacher repository, already wrapped by the cache-aside decorator.
    pub teacher_repo: Arc<dyn TeacherRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    fn build(teacher_repo: Arc<dyn TeacherRepository>) -> Self {
        Self { teacher_repo }
    }

    /// Wraps a store and a cache in the cache-aside decorator.
    fn cached<S, C>(store: S, cache: C) -> Self
    where
        S: faculty_core::storage::TeacherStore + 'static,
        C: faculty_core::cache::Cache + 'static,
    {
        Self::build(Arc::new(CachedTeacherRepository::new(
            Arc::new(store),
            Arc::new(cache),
        )))
    }
}

// ============================================================================
// Backend factories, one per storage and cache combination
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = SqliteStore::new(&config.sqlite_path).await?;
            let cache = MemoryCache::new(config.cache_max_entries);

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with in-memory cache");

            Ok(Self::cached(store, cache))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = SqliteStore::new(&config.sqlite_path).await?;
            let cache = RedisCache::new(&config.redis_url).await?;

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with Redis cache");

            Ok(Self::cached(store, cache))
        }
    }
}

#[cfg(all(feature = "postgres", feature = "memory"))]
mod postgres_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::PostgresStore;

    impl AppState {
        /// Creates AppState with PostgreSQL storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = PostgresStore::connect(&config.database_url).await?;
            let cache = MemoryCache::new(config.cache_max_entries);

            tracing::info!("Using PostgreSQL storage with in-memory cache");

            Ok(Self::cached(store, cache))
        }
    }
}

#[cfg(all(feature = "postgres", feature = "redis"))]
mod postgres_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::PostgresStore;

    impl AppState {
        /// Creates AppState with PostgreSQL storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = PostgresStore::connect(&config.database_url).await?;
            let cache = RedisCache::new(&config.redis_url).await?;

            tracing::info!("Using PostgreSQL storage with Redis cache");

            Ok(Self::cached(store, cache))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage with in-memory cache");

            Ok(Self::cached(
                InMemoryStore::new(),
                MemoryCache::new(config.cache_max_entries),
            ))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let cache = RedisCache::new(&config.redis_url).await?;

            tracing::info!("Using in-memory storage with Redis cache");

            Ok(Self::cached(InMemoryStore::new(), cache))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
