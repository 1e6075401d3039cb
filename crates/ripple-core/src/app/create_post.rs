//! Use case: author a post and announce it.

use std::sync::Arc;
use tracing::warn;

use crate::domain::{Event, Post, RippleError, UserId};
use crate::ports::{Clock, EventPublisher, IdGenerator, PostStore};

/// Validates, persists, then publishes. Validation failures happen before
/// anything is stored or announced. A rejected dispatch is logged and
/// otherwise ignored: the post is already saved, delivery is just degraded.
pub struct CreatePost {
    posts: Arc<dyn PostStore>,
    publisher: Arc<dyn EventPublisher>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CreatePost {
    pub fn new(
        posts: Arc<dyn PostStore>,
        publisher: Arc<dyn EventPublisher>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            publisher,
            ids,
            clock,
        }
    }

    pub async fn execute(
        &self,
        author_id: UserId,
        content: impl Into<String>,
    ) -> Result<Post, RippleError> {
        let post = Post::new(self.ids.post_id(), author_id, content, self.clock.now())?;
        let saved = self.posts.save(post).await?;

        if let Err(err) = self.publisher.publish(&Event::post_created(&saved)) {
            warn!(post_id = %saved.id, %err, "post saved but fan-out dispatch was rejected");
        }
        Ok(saved)
    }
}
