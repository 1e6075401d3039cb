//! TimelineStore port.

use async_trait::async_trait;

use crate::domain::{RippleError, TimelineEntry, UserId};

/// Materialized per-user feeds. Timelines are created lazily on first push
/// and only ever grow; there is no eviction in this core.
#[async_trait]
pub trait TimelineStore: Send + Sync {
    async fn push(&self, user_id: &UserId, entry: TimelineEntry) -> Result<(), RippleError>;

    /// The `limit` most recent entries of the user's feed, newest first.
    /// A user with no timeline yet gets an empty Vec, never an error.
    async fn timeline(&self, user_id: &UserId, limit: usize) -> Vec<TimelineEntry>;

    /// Earliest entry in the user's feed, if any.
    async fn oldest(&self, user_id: &UserId) -> Option<TimelineEntry>;
}
