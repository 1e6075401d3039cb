//! Use case: form a follow edge and announce it.

use std::sync::Arc;
use tracing::warn;

use crate::domain::{Event, Follow, RippleError, UserId};
use crate::ports::{EventPublisher, FollowStore};

/// Validates, persists (idempotently), then publishes. As with posting, a
/// rejected dispatch leaves the edge saved and is only logged; the follower
/// just misses the backfill.
pub struct FollowUser {
    follows: Arc<dyn FollowStore>,
    publisher: Arc<dyn EventPublisher>,
}

impl FollowUser {
    pub fn new(follows: Arc<dyn FollowStore>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { follows, publisher }
    }

    pub async fn execute(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Follow, RippleError> {
        let follow = Follow::new(follower_id, followed_id)?;
        let saved = self.follows.save(follow).await?;

        if let Err(err) = self.publisher.publish(&Event::user_followed(&saved)) {
            warn!(
                follower_id = %saved.follower_id,
                followed_id = %saved.followed_id,
                %err,
                "follow saved but backfill dispatch was rejected"
            );
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventKind;
    use crate::impls::InMemoryFollowStore;
    use crate::ports::EventHandler;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct CapturingPublisher {
        published: Mutex<Vec<Event>>,
    }

    impl EventPublisher for CapturingPublisher {
        fn publish(&self, event: &Event) -> Result<(), RippleError> {
            self.published.lock().push(event.clone());
            Ok(())
        }

        fn add_listener(&self, _kind: EventKind, _handler: Arc<dyn EventHandler>) {}
    }

    #[tokio::test]
    async fn saves_then_publishes() {
        let follows = Arc::new(InMemoryFollowStore::new());
        let publisher = Arc::new(CapturingPublisher::default());
        let usecase = FollowUser::new(follows.clone(), publisher.clone());

        let follow = usecase
            .execute(UserId::new("alice"), UserId::new("bob"))
            .await
            .unwrap();

        assert!(
            follows
                .exists(&UserId::new("alice"), &UserId::new("bob"))
                .await
        );
        assert_eq!(
            *publisher.published.lock(),
            vec![Event::user_followed(&follow)]
        );
    }

    #[tokio::test]
    async fn empty_ids_are_rejected_before_save_and_publish() {
        let follows = Arc::new(InMemoryFollowStore::new());
        let publisher = Arc::new(CapturingPublisher::default());
        let usecase = FollowUser::new(follows.clone(), publisher.clone());

        let err = usecase
            .execute(UserId::new(""), UserId::new("bob"))
            .await
            .unwrap_err();

        assert!(matches!(err, RippleError::EmptyId("follower id")));
        assert!(follows.followers_of(&UserId::new("bob")).await.is_empty());
        assert!(publisher.published.lock().is_empty());
    }

    #[tokio::test]
    async fn refollowing_publishes_again() {
        // the edge save is idempotent; the announcement is not
        let follows = Arc::new(InMemoryFollowStore::new());
        let publisher = Arc::new(CapturingPublisher::default());
        let usecase = FollowUser::new(follows, publisher.clone());

        for _ in 0..2 {
            usecase
                .execute(UserId::new("alice"), UserId::new("bob"))
                .await
                .unwrap();
        }
        assert_eq!(publisher.published.lock().len(), 2);
    }
}
