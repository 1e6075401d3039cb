//! Domain events.
//!
//! Events are immutable values, not entities: no identity, no persistence,
//! no ordering across events. Handlers are registered per [`EventKind`] and
//! dispatch matches on the kind, never on runtime type inspection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::follow::Follow;
use super::ids::{PostId, UserId};
use super::post::Post;

/// The closed set of event kinds the dispatch engine routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    PostCreated,
    UserFollowed,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::PostCreated => "post_created".fmt(f),
            EventKind::UserFollowed => "user_followed".fmt(f),
        }
    }
}

/// A domain event, carrying everything a handler needs as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    PostCreated {
        post_id: PostId,
        author_id: UserId,
        content: String,
        created_at: DateTime<Utc>,
    },
    UserFollowed {
        follower_id: UserId,
        followed_id: UserId,
    },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::PostCreated { .. } => EventKind::PostCreated,
            Event::UserFollowed { .. } => EventKind::UserFollowed,
        }
    }

    pub fn post_created(post: &Post) -> Self {
        Event::PostCreated {
            post_id: post.id,
            author_id: post.author_id.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
        }
    }

    pub fn user_followed(follow: &Follow) -> Self {
        Event::UserFollowed {
            follower_id: follow.follower_id.clone(),
            followed_id: follow.followed_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ulid::Ulid;

    #[test]
    fn kind_matches_variant() {
        let post = Post::new(
            PostId::from_ulid(Ulid::new()),
            UserId::new("alice"),
            "hello",
            Utc::now(),
        )
        .unwrap();
        assert_eq!(Event::post_created(&post).kind(), EventKind::PostCreated);

        let follow = Follow::new(UserId::new("bob"), UserId::new("alice")).unwrap();
        assert_eq!(Event::user_followed(&follow).kind(), EventKind::UserFollowed);
    }

    #[test]
    fn post_created_carries_a_snapshot() {
        let post = Post::new(
            PostId::from_ulid(Ulid::new()),
            UserId::new("alice"),
            "hello",
            Utc::now(),
        )
        .unwrap();

        let Event::PostCreated {
            post_id,
            author_id,
            content,
            created_at,
        } = Event::post_created(&post)
        else {
            panic!("expected PostCreated");
        };
        assert_eq!(post_id, post.id);
        assert_eq!(author_id, post.author_id);
        assert_eq!(content, post.content);
        assert_eq!(created_at, post.created_at);
    }

    #[test]
    fn events_round_trip_through_serde() {
        let follow = Follow::new(UserId::new("bob"), UserId::new("alice")).unwrap();
        let event = Event::user_followed(&follow);

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
