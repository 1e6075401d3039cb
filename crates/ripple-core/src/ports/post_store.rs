//! PostStore port.

use async_trait::async_trait;

use crate::domain::{Post, PostId, RippleError, UserId};

/// Keyed store of posts with author-scoped recency queries.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert-or-overwrite by post id. A second save with the same id
    /// silently replaces the stored post; there is no uniqueness error.
    async fn save(&self, post: Post) -> Result<Post, RippleError>;

    async fn find_by_id(&self, id: PostId) -> Option<Post>;

    /// All posts by the author, newest first.
    async fn find_by_author(&self, author_id: &UserId) -> Vec<Post>;

    /// The `limit` most recent posts by the author, newest first.
    ///
    /// A plain top-N query: no time cursor, no "after" filtering. Callers
    /// that already hold some of these posts get them again.
    async fn recent_by_author(&self, author_id: &UserId, limit: usize) -> Vec<Post>;

    /// Every post, newest first. Diagnostic/bulk use only.
    async fn find_all(&self) -> Vec<Post>;
}
