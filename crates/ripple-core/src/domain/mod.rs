//! Domain model (ids, posts, follows, timelines, events, errors).

pub mod errors;
pub mod events;
pub mod follow;
pub mod ids;
pub mod post;
pub mod timeline;

pub use self::errors::RippleError;
pub use self::events::{Event, EventKind};
pub use self::follow::Follow;
pub use self::ids::{PostId, UserId};
pub use self::post::{MAX_CONTENT_CHARS, Post};
pub use self::timeline::{EntryKey, Timeline, TimelineEntry};
