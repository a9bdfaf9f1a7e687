//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::PostService;
use posts_core::ports::PostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state around an already-connected repository.
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        tracing::info!("Application state initialized");

        Self {
            posts: PostService::new(repository),
        }
    }
}
