//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `TeacherStore` that
//! keeps rows in a `BTreeMap` behind a tokio `RwLock` and hands out IDs from a
//! counter, like an auto-increment column. Useful for tests and demos where
//! persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use faculty::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! let id = store.insert(&NewTeacher::new("Ada", "ada@x.io")).await?;
//! ```

mod repository;

pub use repository::InMemoryStore;
