//! In-memory post store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{Post, PostId, RippleError, UserId};
use crate::ports::PostStore;

/// Concurrent map of posts keyed by id.
///
/// Author queries are linear scans over the map; fine at in-memory scale,
/// and readers never block writers on other keys.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    posts: DashMap<PostId, Post>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn by_author_sorted(&self, author_id: &UserId) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|entry| &entry.value().author_id == author_id)
            .map(|entry| entry.value().clone())
            .collect();
        sort_newest_first(&mut posts);
        posts
    }
}

fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn save(&self, post: Post) -> Result<Post, RippleError> {
        self.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Option<Post> {
        self.posts.get(&id).map(|entry| entry.value().clone())
    }

    async fn find_by_author(&self, author_id: &UserId) -> Vec<Post> {
        self.by_author_sorted(author_id)
    }

    async fn recent_by_author(&self, author_id: &UserId, limit: usize) -> Vec<Post> {
        let mut posts = self.by_author_sorted(author_id);
        posts.truncate(limit);
        posts
    }

    async fn find_all(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.iter().map(|e| e.value().clone()).collect();
        sort_newest_first(&mut posts);
        posts
    }
}
