//! In-memory follow graph.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;

use crate::domain::{Follow, RippleError, UserId};
use crate::ports::FollowStore;

/// Two adjacency views of one logical graph.
///
/// `save` writes both views before returning; lookups on other users run
/// concurrently without a global lock.
#[derive(Debug, Default)]
pub struct InMemoryFollowStore {
    /// followed user -> set of followers
    followers: DashMap<UserId, HashSet<UserId>>,

    /// follower -> set of followed users
    following: DashMap<UserId, HashSet<UserId>>,
}

impl InMemoryFollowStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn members(map: &DashMap<UserId, HashSet<UserId>>, key: &UserId) -> Vec<UserId> {
    map.get(key)
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default()
}

#[async_trait]
impl FollowStore for InMemoryFollowStore {
    async fn save(&self, follow: Follow) -> Result<Follow, RippleError> {
        self.followers
            .entry(follow.followed_id.clone())
            .or_default()
            .insert(follow.follower_id.clone());

        self.following
            .entry(follow.follower_id.clone())
            .or_default()
            .insert(follow.followed_id.clone());

        Ok(follow)
    }

    async fn followers_of(&self, user_id: &UserId) -> Vec<UserId> {
        members(&self.followers, user_id)
    }

    async fn followed_user_ids(&self, user_id: &UserId) -> Vec<UserId> {
        members(&self.following, user_id)
    }

    async fn exists(&self, follower_id: &UserId, followed_id: &UserId) -> bool {
        self.following
            .get(follower_id)
            .is_some_and(|set| set.contains(followed_id))
    }
}
