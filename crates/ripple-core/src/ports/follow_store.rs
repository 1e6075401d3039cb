//! FollowStore port.

use async_trait::async_trait;

use crate::domain::{Follow, RippleError, UserId};

/// Bidirectional follow graph: who follows whom, queryable from both ends.
#[async_trait]
pub trait FollowStore: Send + Sync {
    /// Idempotent save. Both adjacency views (followed -> followers and
    /// follower -> followed) are updated before this returns, so a reader
    /// never sees the edge in one view but not the other afterwards.
    async fn save(&self, follow: Follow) -> Result<Follow, RippleError>;

    /// Everyone following `user_id`.
    async fn followers_of(&self, user_id: &UserId) -> Vec<UserId>;

    /// Everyone `user_id` follows.
    async fn followed_user_ids(&self, user_id: &UserId) -> Vec<UserId>;

    async fn exists(&self, follower_id: &UserId, followed_id: &UserId) -> bool;
}
