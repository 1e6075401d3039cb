//! AppBuilder - 構築とワイヤリング
//!
//! Builds the stores, the worker pool, the dispatch engine, registers both
//! timeline handlers, and hands back the wired use cases. The handler
//! registrations here are the only ones the system needs; everything else
//! reaches the engine through `publish`.

use std::sync::Arc;

use crate::app::backfill::BackfillHandler;
use crate::app::config::RippleConfig;
use crate::app::create_post::CreatePost;
use crate::app::fanout::FanoutHandler;
use crate::app::follow_user::FollowUser;
use crate::app::get_timeline::GetTimeline;
use crate::domain::EventKind;
use crate::impls::{
    InMemoryEventPublisher, InMemoryFollowStore, InMemoryPostStore, InMemoryTimelineStore,
    WorkerPool,
};
use crate::ports::{EventPublisher, SystemClock, UlidGenerator};

pub struct AppBuilder {
    config: RippleConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: RippleConfig::default(),
        }
    }

    pub fn config(mut self, config: RippleConfig) -> Self {
        self.config = config;
        self
    }

    /// Wire everything up. Must be called inside a Tokio runtime (the pool
    /// spawns its core workers here).
    pub fn build(self) -> App {
        let posts = Arc::new(InMemoryPostStore::new());
        let follows = Arc::new(InMemoryFollowStore::new());
        let timelines = Arc::new(InMemoryTimelineStore::new());

        let pool = Arc::new(WorkerPool::new(self.config.pool.clone()));
        let publisher = Arc::new(InMemoryEventPublisher::new(pool));

        publisher.add_listener(
            EventKind::PostCreated,
            Arc::new(FanoutHandler::new(follows.clone(), timelines.clone())),
        );
        publisher.add_listener(
            EventKind::UserFollowed,
            Arc::new(BackfillHandler::new(
                posts.clone(),
                timelines.clone(),
                self.config.backfill_limit,
            )),
        );

        let publisher_port: Arc<dyn EventPublisher> = publisher.clone();
        App {
            create_post: CreatePost::new(
                posts,
                publisher_port.clone(),
                Arc::new(UlidGenerator::new(SystemClock)),
                Arc::new(SystemClock),
            ),
            follow_user: FollowUser::new(follows, publisher_port),
            get_timeline: GetTimeline::new(timelines, self.config.max_timeline_length),
            publisher,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The wired application: three use cases over shared in-memory state.
pub struct App {
    pub create_post: CreatePost,
    pub follow_user: FollowUser,
    pub get_timeline: GetTimeline,
    publisher: Arc<InMemoryEventPublisher>,
}

impl App {
    /// Stop the dispatch engine: bounded drain, then force-cancel.
    pub async fn shutdown(&self) {
        self.publisher.shutdown().await;
    }
}
