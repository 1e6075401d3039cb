//! Per-user timeline: an ordered, deduplicating collection of feed entries.
//!
//! Entries are keyed by `(created_at, post_id)`. The map iterates newest
//! first (timestamp descending, post id ascending on ties), and inserting an
//! entry whose key is already present overwrites it. That overwrite is the
//! dedup contract: fan-out and backfill can race on the same post and the
//! timeline still ends up with exactly one copy.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::ids::{PostId, UserId};
use super::post::Post;

/// A denormalized snapshot of a post, copied into one follower's feed.
///
/// Deliberately not a reference to the stored post: each follower owns an
/// independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl TimelineEntry {
    pub fn key(&self) -> EntryKey {
        EntryKey {
            created_at: Reverse(self.created_at),
            post_id: self.post_id,
        }
    }
}

impl From<&Post> for TimelineEntry {
    fn from(post: &Post) -> Self {
        Self {
            post_id: post.id,
            author_id: post.author_id.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
        }
    }
}

/// Composite ordering key: timestamp descending, then post id ascending.
///
/// `Reverse` on the timestamp makes the natural (ascending) iteration order
/// of a `BTreeMap` yield newest entries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryKey {
    created_at: Reverse<DateTime<Utc>>,
    post_id: PostId,
}

/// One user's materialized feed.
///
/// The mutex is per timeline, so writers to different users never contend;
/// writers to the same user serialize. Readers take the same lock briefly
/// and copy out, so they always observe a consistent snapshot.
#[derive(Debug, Default)]
pub struct Timeline {
    entries: Mutex<BTreeMap<EntryKey, TimelineEntry>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry in O(log n). An entry with an already-present
    /// `(created_at, post_id)` key replaces the existing one.
    pub fn add(&self, entry: TimelineEntry) {
        self.entries.lock().insert(entry.key(), entry);
    }

    /// The `limit` most recent entries, newest first.
    pub fn items(&self, limit: usize) -> Vec<TimelineEntry> {
        self.entries
            .lock()
            .values()
            .take(limit)
            .cloned()
            .collect()
    }

    /// The chronologically earliest entry, if any.
    pub fn oldest(&self) -> Option<TimelineEntry> {
        self.entries
            .lock()
            .last_key_value()
            .map(|(_, entry)| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
