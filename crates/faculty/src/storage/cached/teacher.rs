//! Cached teacher repository decorator.
//!
//! Wraps a `TeacherStore` implementation with the cache-aside pattern.

use std::sync::Arc;

use async_trait::async_trait;

use faculty_core::cache::{deserialize_teacher, serialize_teacher, teacher_key, Cache, CacheLookup};
use faculty_core::storage::{RepositoryError, Result, TeacherRepository, TeacherStore};
use faculty_core::teacher::{NewTeacher, Teacher};

/// Cached teacher repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: Check cache first, on miss fetch from the store and populate cache
/// - **Writes**: Persist to the store, invalidate cache
///
/// The cache is never authoritative. A cache hit is returned without touching
/// the store, so every write path must invalidate. Cache failures are logged
/// and absorbed; only store errors reach the caller.
///
/// Cache entries are written without a TTL and live until invalidated or
/// evicted by the cache itself.
///
/// # Type Parameters
///
/// * `S` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedTeacherRepository<S, C>
where
    S: TeacherStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> CachedTeacherRepository<S, C>
where
    S: TeacherStore,
    C: Cache,
{
    /// Creates a new cached teacher repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The record store to cache
    /// * `cache` - The cache implementation
    pub fn new(store: Arc<S>, cache: Arc<C>) -> Self {
        Self { store, cache }
    }

    /// Reads a teacher from the cache.
    async fn lookup(&self, key: &str) -> CacheLookup<Teacher> {
        CacheLookup::from_raw(self.cache.get(key).await, deserialize_teacher)
    }

    /// Best-effort write of a freshly loaded teacher into the cache.
    async fn populate(&self, key: &str, teacher: &Teacher) {
        let bytes = match serialize_teacher(teacher) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(teacher_id = teacher.id, error = %err, "Failed to serialize teacher for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &bytes, None).await {
            tracing::warn!(teacher_id = teacher.id, error = %err, "Failed to cache teacher");
        }
    }

    /// Removes the cached teacher. Failures are logged, never returned.
    async fn invalidate(&self, id: i64) {
        let cache_key = teacher_key(id);
        if let Err(err) = self.cache.delete(&cache_key).await {
            tracing::warn!(teacher_id = id, error = %err, "Failed to invalidate teacher cache");
        }
    }
}

#[async_trait]
impl<S, C> TeacherRepository for CachedTeacherRepository<S, C>
where
    S: TeacherStore + 'static,
    C: Cache + 'static,
{
    async fn create_teacher(&self, teacher: &NewTeacher) -> Result<i64> {
        // The cache is left alone; the first read populates it.
        let id = self.store.insert(teacher).await?;

        tracing::debug!(teacher_id = id, name = %teacher.name, "Teacher created");
        Ok(id)
    }

    async fn get_teacher(&self, id: i64) -> Result<Teacher> {
        let cache_key = teacher_key(id);

        // Check cache first
        let lookup = self.lookup(&cache_key).await;
        if let Some(err) = lookup.error() {
            tracing::warn!(teacher_id = id, error = %err, "Cache lookup failed, reading from store");
        }
        if let Some(teacher) = lookup.into_hit() {
            tracing::trace!(teacher_id = id, "Cache hit for teacher");
            return Ok(teacher);
        }

        // Cache miss - fetch from store
        tracing::trace!(teacher_id = id, "Cache miss for teacher");
        let teacher = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::teacher_not_found(id))?;

        self.populate(&cache_key, &teacher).await;

        Ok(teacher)
    }

    async fn update_teacher(&self, teacher: &Teacher) -> Result<()> {
        // 1. Persist to storage
        let result = self.store.update(teacher).await;

        // 2. Invalidate cache whether or not the store call succeeded
        self.invalidate(teacher.id).await;

        match &result {
            Ok(()) => tracing::debug!(teacher_id = teacher.id, name = %teacher.name, "Teacher updated"),
            Err(err) => tracing::debug!(teacher_id = teacher.id, error = %err, "Teacher update failed"),
        }
        result
    }

    async fn delete_teacher(&self, id: i64) -> Result<()> {
        // 1. Persist deletion to storage
        let result = self.store.delete(id).await;

        // 2. Invalidate cache whether or not the store call succeeded
        self.invalidate(id).await;

        match &result {
            Ok(()) => tracing::debug!(teacher_id = id, "Teacher deleted"),
            Err(err) => tracing::debug!(teacher_id = id, error = %err, "Teacher delete failed"),
        }
        result
    }
}
