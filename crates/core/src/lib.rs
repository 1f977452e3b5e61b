//! Functional core for the faculty service.
//!
//! Domain types, cache contracts and storage contracts. Nothing in this crate
//! performs I/O; backends live in the `faculty` binary crate.

pub mod cache;
pub mod storage;
pub mod teacher;
