//! Backfill on follow: seed the new follower's timeline with the followed
//! user's recent posts.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{Event, RippleError, TimelineEntry};
use crate::ports::{EventHandler, PostStore, TimelineStore};

/// Reacts to `UserFollowed`.
///
/// Always fetches the newest `limit` posts, whatever the follower's
/// timeline already holds; entries the follower already has collapse via
/// the timeline's dedup-by-key rule. The same rule makes the race with a
/// concurrent fan-out of a brand-new post harmless: both paths build the
/// entry from the same (post id, timestamp) pair.
pub struct BackfillHandler {
    posts: Arc<dyn PostStore>,
    timelines: Arc<dyn TimelineStore>,
    limit: usize,
}

impl BackfillHandler {
    pub fn new(posts: Arc<dyn PostStore>, timelines: Arc<dyn TimelineStore>, limit: usize) -> Self {
        Self {
            posts,
            timelines,
            limit,
        }
    }
}

#[async_trait]
impl EventHandler for BackfillHandler {
    async fn handle(&self, event: &Event) -> Result<(), RippleError> {
        let Event::UserFollowed {
            follower_id,
            followed_id,
        } = event
        else {
            return Ok(());
        };

        let recent = self.posts.recent_by_author(followed_id, self.limit).await;
        debug!(%follower_id, %followed_id, posts = recent.len(), "backfilling timeline");

        // 新しい順にひとつずつ書き込む
        for post in &recent {
            self.timelines
                .push(follower_id, TimelineEntry::from(post))
                .await?;
        }
        Ok(())
    }
}
