//! In-memory cache backend implementation.
//!
//! Provides a thread-safe in-memory LRU cache for single-instance deployments.

mod cache;

pub use cache::MemoryCache;
