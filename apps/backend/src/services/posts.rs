use uuid::Uuid;

use crate::domain::post::{Post, PostCreate};
use crate::errors::domain::DomainError;
use crate::repos::posts::PostStore;

/// Publish a feed post.
pub async fn publish(posts: &dyn PostStore, input: PostCreate) -> Result<Post, DomainError> {
    if input.content.trim().is_empty() {
        return Err(DomainError::validation("A post needs content"));
    }
    posts.create(input).await
}

/// Global feed, newest first.
pub async fn feed(posts: &dyn PostStore, limit: usize) -> Result<Vec<Post>, DomainError> {
    posts.list_recent(limit).await
}

/// One author's posts, newest first.
pub async fn author_feed(
    posts: &dyn PostStore,
    author_id: Uuid,
) -> Result<Vec<Post>, DomainError> {
    posts.list_by_author(author_id).await
}
