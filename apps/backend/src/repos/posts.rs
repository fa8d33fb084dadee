use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::post::{Post, PostCreate};
use crate::errors::domain::DomainError;

/// Social post storage contract. Listings are newest-first.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    async fn create(&self, input: PostCreate) -> Result<Post, DomainError>;

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, DomainError>;

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, DomainError>;
}
