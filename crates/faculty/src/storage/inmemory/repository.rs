//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use faculty_core::storage::{Result, TeacherStore};
use faculty_core::teacher::{NewTeacher, Teacher};

/// In-memory storage backend for testing.
///
/// Uses a BTreeMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// IDs start at 1 and are never reused. Data is not persisted and will be
/// lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    teachers: Arc<RwLock<BTreeMap<i64, Teacher>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            teachers: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl TeacherStore for InMemoryStore {
    async fn insert(&self, teacher: &NewTeacher) -> Result<i64> {
        let mut teachers = self.teachers.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        teachers.insert(id, teacher.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        let teachers = self.teachers.read().await;
        Ok(teachers.get(&id).cloned())
    }

    async fn update(&self, teacher: &Teacher) -> Result<()> {
        let mut teachers = self.teachers.write().await;
        if let Some(existing) = teachers.get_mut(&teacher.id) {
            *existing = teacher.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut teachers = self.teachers.write().await;
        teachers.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryStore::new();

        let id = store
            .insert(&NewTeacher::new("Ada", "ada@x.io"))
            .await
            .unwrap();

        assert_eq!(id, 1);
        let found = store.find_by_id(id).await.unwrap();
        assert_eq!(found, Some(Teacher::new(1, "Ada", "ada@x.io")));
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = InMemoryStore::new();

        let first = store.insert(&NewTeacher::new("a", "a@x.io")).await.unwrap();
        let second = store.insert(&NewTeacher::new("b", "b@x.io")).await.unwrap();

        assert_eq!((first, second), (1, 2));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryStore::new();

        let first = store.insert(&NewTeacher::new("a", "a@x.io")).await.unwrap();
        store.delete(first).await.unwrap();
        let second = store.insert(&NewTeacher::new("b", "b@x.io")).await.unwrap();

        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_find_nonexistent() {
        let store = InMemoryStore::new();

        assert_eq!(store.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update() {
        let store = InMemoryStore::new();
        let id = store
            .insert(&NewTeacher::new("Ada", "ada@x.io"))
            .await
            .unwrap();

        store
            .update(&Teacher::new(id, "Ada L.", "ada@x.io"))
            .await
            .unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ada L.");
    }

    #[tokio::test]
    async fn test_update_nonexistent_does_not_insert() {
        let store = InMemoryStore::new();

        store
            .update(&Teacher::new(404, "Nobody", "no@x.io"))
            .await
            .unwrap();

        assert_eq!(store.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let store = InMemoryStore::new();

        assert!(store.delete(404).await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = InMemoryStore::new();
        let clone = store.clone();

        let id = store
            .insert(&NewTeacher::new("Ada", "ada@x.io"))
            .await
            .unwrap();

        assert!(clone.find_by_id(id).await.unwrap().is_some());
    }
}
