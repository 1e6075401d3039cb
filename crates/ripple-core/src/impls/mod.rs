//! Impls - インメモリ実装
//!
//! ports の実装をまとめます。すべてプロセス内・非永続です:
//! - **InMemoryPostStore** / **InMemoryFollowStore** / **InMemoryTimelineStore**
//! - **WorkerPool**: bounded queue + bounded workers
//! - **InMemoryEventPublisher**: registry + pool の dispatch engine

pub mod follow_store;
pub mod pool;
pub mod post_store;
pub mod publisher;
pub mod timeline_store;

pub use self::follow_store::InMemoryFollowStore;
pub use self::pool::{PoolConfig, WorkerPool};
pub use self::post_store::InMemoryPostStore;
pub use self::publisher::InMemoryEventPublisher;
pub use self::timeline_store::InMemoryTimelineStore;
