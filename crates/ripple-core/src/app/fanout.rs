//! Fan-out on write: copy a new post into every follower's timeline.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::domain::{Event, RippleError, TimelineEntry};
use crate::ports::{EventHandler, FollowStore, TimelineStore};

/// Reacts to `PostCreated`.
///
/// The follower set is read once, as a point-in-time snapshot; a follow
/// formed while this handler runs may or may not be included (the backfill
/// path covers the new follower either way, and the timeline dedup rule
/// absorbs the overlap). Per-follower writes run in parallel and are
/// isolated from each other: one failed write is logged and the rest
/// proceed.
pub struct FanoutHandler {
    follows: Arc<dyn FollowStore>,
    timelines: Arc<dyn TimelineStore>,
}

impl FanoutHandler {
    pub fn new(follows: Arc<dyn FollowStore>, timelines: Arc<dyn TimelineStore>) -> Self {
        Self { follows, timelines }
    }
}

#[async_trait]
impl EventHandler for FanoutHandler {
    async fn handle(&self, event: &Event) -> Result<(), RippleError> {
        let Event::PostCreated {
            post_id,
            author_id,
            content,
            created_at,
        } = event
        else {
            return Ok(());
        };

        let followers = self.follows.followers_of(author_id).await;
        debug!(%author_id, followers = followers.len(), "fanning out new post");

        let mut writes = JoinSet::new();
        for follower_id in followers {
            // フォロワーごとに独立したコピーを書き込む
            let entry = TimelineEntry {
                post_id: *post_id,
                author_id: author_id.clone(),
                content: content.clone(),
                created_at: *created_at,
            };
            let timelines = Arc::clone(&self.timelines);
            writes.spawn(async move {
                let result = timelines.push(&follower_id, entry).await;
                (follower_id, result)
            });
        }

        while let Some(joined) = writes.join_next().await {
            match joined {
                Ok((_, Ok(()))) => {}
                Ok((follower_id, Err(err))) => {
                    warn!(%follower_id, %err, "timeline write failed during fan-out");
                }
                Err(err) => {
                    warn!(%err, "fan-out write task failed");
                }
            }
        }
        Ok(())
    }
}
