//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TeacherStore` trait
//! defined in `faculty_core::storage`, plus the cache-aside decorator that
//! turns a store and a cache into a `TeacherRepository`. The store is
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `postgres`: PostgreSQL storage backend using `sqlx`
//! - `inmemory`: map-backed storage, nothing is persisted
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p faculty
//! ```
//!
//! Build with PostgreSQL and Redis:
//! ```bash
//! cargo build -p faculty --no-default-features --features postgres,redis
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "postgres"))]
compile_error!(
    "Features 'sqlite' and 'postgres' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(all(feature = "postgres", feature = "inmemory"))]
compile_error!(
    "Features 'postgres' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "postgres", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite', 'postgres' or 'inmemory' feature. \
    Example: cargo build -p faculty --features sqlite"
);

pub mod cached;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

// The in-memory store also backs the router tests, whichever backend is selected.
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;
