//! # Posts Core
//!
//! The domain layer of the posts service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post entity, request validation, the repository port, and the
//! validate-then-persist service pipeline.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{PostError, PostResult, RepoError, ValidationError};
pub use service::PostService;
