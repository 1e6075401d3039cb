//! Ports - 抽象化レイヤー
//!
//! Hexagonal Architecture の「ポート」を定義します。ストアの trait は
//! インメモリ実装とその差し替え先（いずれ永続化するなら）の継ぎ目です。
//!
//! Store reads are expected to be fast data-structure operations, not I/O;
//! nothing here should hold a handler hostage.

pub mod clock;
pub mod event_publisher;
pub mod follow_store;
pub mod id_generator;
pub mod post_store;
pub mod timeline_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_publisher::{EventHandler, EventPublisher};
pub use self::follow_store::FollowStore;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::post_store::PostStore;
pub use self::timeline_store::TimelineStore;
