//! # Posts Infrastructure
//!
//! Concrete implementations of the ports defined in `posts-core`:
//! a SeaORM-backed repository for MySQL and an in-memory repository
//! for tests and local runs.

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, SqlPostRepository};
pub use memory::InMemoryPostRepository;
