//! In-memory timeline store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::domain::{RippleError, Timeline, TimelineEntry, UserId};
use crate::ports::TimelineStore;

/// Concurrent map user -> timeline.
///
/// The outer map only gates timeline creation; mutation of a timeline goes
/// through that timeline's own lock, so two users' feeds are written with
/// zero contention between them.
#[derive(Debug, Default)]
pub struct InMemoryTimelineStore {
    timelines: DashMap<UserId, Arc<Timeline>>,
}

impl InMemoryTimelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, user_id: &UserId) -> Option<Arc<Timeline>> {
        self.timelines.get(user_id).map(|t| Arc::clone(t.value()))
    }
}

#[async_trait]
impl TimelineStore for InMemoryTimelineStore {
    async fn push(&self, user_id: &UserId, entry: TimelineEntry) -> Result<(), RippleError> {
        // shard ロックは Arc の clone までで手放す
        let timeline = {
            let slot = self.timelines.entry(user_id.clone()).or_default();
            Arc::clone(slot.value())
        };
        timeline.add(entry);
        Ok(())
    }

    async fn timeline(&self, user_id: &UserId, limit: usize) -> Vec<TimelineEntry> {
        match self.get(user_id) {
            Some(timeline) => timeline.items(limit),
            None => Vec::new(),
        }
    }

    async fn oldest(&self, user_id: &UserId) -> Option<TimelineEntry> {
        self.get(user_id)?.oldest()
    }
}
