use async_trait::async_trait;
use uuid::Uuid;

use super::{now, MemStore};
use crate::domain::post::{Post, PostCreate};
use crate::errors::domain::DomainError;
use crate::repos::posts::PostStore;

#[async_trait]
impl PostStore for MemStore {
    async fn find(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.get(&id).map(|p| p.clone()))
    }

    async fn create(&self, input: PostCreate) -> Result<Post, DomainError> {
        let post = Post {
            id: Uuid::new_v4(),
            author_id: input.author_id,
            content: input.content,
            created_at: now(),
        };
        self.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, DomainError> {
        Ok(self.collect_posts(|p| p.author_id == author_id, usize::MAX))
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        Ok(self.collect_posts(|_| true, limit))
    }
}

impl MemStore {
    fn collect_posts(&self, keep: impl Fn(&Post) -> bool, limit: usize) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| keep(p.value()))
            .map(|p| p.clone())
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        posts.truncate(limit);
        posts
    }
}
