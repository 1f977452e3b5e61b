//! Cached repository decorator.
//!
//! [`CachedTeacherRepository`] wraps a `TeacherStore` with the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then invalidate the cache entry
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let store = Arc::new(SqliteStore::new("faculty.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let repo = CachedTeacherRepository::new(store, cache);
//! ```

mod teacher;

pub use teacher::CachedTeacherRepository;
