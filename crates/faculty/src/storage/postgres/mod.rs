//! PostgreSQL storage backend implementation.
//!
//! This module provides a PostgreSQL-based implementation of `TeacherStore`
//! using a `sqlx` connection pool.

mod error;
mod repository;

pub use repository::PostgresStore;
