//! Database connection management and the SQL post repository.

mod connections;
mod sql_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use sql_repo::SqlPostRepository;
