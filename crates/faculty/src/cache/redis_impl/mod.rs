//! Redis cache backend implementation.
//!
//! Provides a distributed cache using Redis for multi-instance deployments.
//! The connection manager multiplexes one connection across all requests and
//! reconnects on its own after failures.

mod cache;
mod error;

pub use cache::RedisCache;
