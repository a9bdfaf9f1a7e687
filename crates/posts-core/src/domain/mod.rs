//! Domain entities - the core business objects.

mod post;

pub use post::{
    CreatePost, NewPost, Post, PostChanges, PostId, PostPage, PostStatus, UpdatePost,
};
