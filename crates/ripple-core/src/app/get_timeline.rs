//! Use case: read a materialized timeline.

use std::sync::Arc;

use crate::domain::{TimelineEntry, UserId};
use crate::ports::TimelineStore;

/// The only read surface the core offers upward. Because materialization
/// runs asynchronously, a reader who just posted or followed may not see
/// the effect yet.
pub struct GetTimeline {
    timelines: Arc<dyn TimelineStore>,
    max_timeline_length: usize,
}

impl GetTimeline {
    pub fn new(timelines: Arc<dyn TimelineStore>, max_timeline_length: usize) -> Self {
        Self {
            timelines,
            max_timeline_length,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> Vec<TimelineEntry> {
        self.timelines
            .timeline(user_id, self.max_timeline_length)
            .await
    }
}
