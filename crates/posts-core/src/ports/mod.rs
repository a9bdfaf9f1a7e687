//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

#[cfg(test)]
pub use repository::MockPostRepository;
pub use repository::PostRepository;
