//! In-memory dispatch engine: handler registry + worker pool.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{Event, EventKind, RippleError};
use crate::impls::pool::WorkerPool;
use crate::ports::{EventHandler, EventPublisher};

/// Routes events to the handlers registered for their kind, one pool job
/// per handler invocation.
///
/// The registry lock is only held to look handlers up or append one, never
/// across an invocation, so registration stays safe while publishes are in
/// flight on other threads.
pub struct InMemoryEventPublisher {
    pool: Arc<WorkerPool>,
    handlers: RwLock<HashMap<EventKind, Vec<Arc<dyn EventHandler>>>>,
}

impl InMemoryEventPublisher {
    pub fn new(pool: Arc<WorkerPool>) -> Self {
        Self {
            pool,
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Drain the underlying pool: queued invocations get their grace period,
    /// stragglers are cancelled.
    pub async fn shutdown(&self) {
        self.pool.shutdown().await;
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: &Event) -> Result<(), RippleError> {
        let handlers = self.handlers.read().get(&event.kind()).cloned();
        let Some(handlers) = handlers.filter(|h| !h.is_empty()) else {
            debug!(kind = %event.kind(), "no handler registered for event");
            return Ok(());
        };

        for handler in handlers {
            let event = event.clone();
            self.pool.submit(async move {
                // handler のエラーはここで握りつぶす（リトライなし）
                if let Err(err) = handler.handle(&event).await {
                    warn!(kind = %event.kind(), %err, "event handler failed");
                }
            })?;
        }
        Ok(())
    }

    fn add_listener(&self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        self.handlers.write().entry(kind).or_default().push(handler);
        info!(%kind, "handler registered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Follow, UserId};
    use crate::impls::pool::PoolConfig;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Semaphore;
    use tokio::time::{sleep, timeout};

    struct Recording {
        seen: Mutex<Vec<Event>>,
        hits: AtomicUsize,
    }

    impl Recording {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                hits: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl EventHandler for Recording {
        async fn handle(&self, event: &Event) -> Result<(), RippleError> {
            self.seen.lock().push(event.clone());
            self.hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl EventHandler for Failing {
        async fn handle(&self, _event: &Event) -> Result<(), RippleError> {
            Err(RippleError::Handler("boom".into()))
        }
    }

    fn follow_event() -> Event {
        Event::user_followed(&Follow::new(UserId::new("alice"), UserId::new("bob")).unwrap())
    }

    fn publisher() -> InMemoryEventPublisher {
        InMemoryEventPublisher::new(Arc::new(WorkerPool::new(PoolConfig::default())))
    }

    #[tokio::test]
    async fn publish_without_handlers_is_a_no_op() {
        let publisher = publisher();
        publisher.publish(&follow_event()).unwrap();
        publisher.shutdown().await;
    }

    #[tokio::test]
    async fn registered_handler_receives_the_event() {
        let publisher = publisher();
        let recording = Recording::new();
        publisher.add_listener(EventKind::UserFollowed, recording.clone());

        let event = follow_event();
        publisher.publish(&event).unwrap();
        publisher.shutdown().await;

        assert_eq!(*recording.seen.lock(), vec![event]);
    }

    #[tokio::test]
    async fn handler_only_sees_its_own_kind() {
        let publisher = publisher();
        let recording = Recording::new();
        publisher.add_listener(EventKind::PostCreated, recording.clone());

        publisher.publish(&follow_event()).unwrap();
        publisher.shutdown().await;

        assert!(recording.seen.lock().is_empty());
    }

    #[tokio::test]
    async fn registering_twice_runs_twice() {
        let publisher = publisher();
        let recording = Recording::new();
        publisher.add_listener(EventKind::UserFollowed, recording.clone());
        publisher.add_listener(EventKind::UserFollowed, recording.clone());

        publisher.publish(&follow_event()).unwrap();
        publisher.shutdown().await;

        assert_eq!(recording.hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handler_failure_is_confined() {
        let publisher = publisher();
        let recording = Recording::new();
        publisher.add_listener(EventKind::UserFollowed, Arc::new(Failing));
        publisher.add_listener(EventKind::UserFollowed, recording.clone());

        // publish succeeds and the healthy handler still runs
        publisher.publish(&follow_event()).unwrap();
        publisher.shutdown().await;

        assert_eq!(recording.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn saturation_surfaces_to_the_publish_caller() {
        let pool = Arc::new(WorkerPool::new(PoolConfig {
            core_workers: 1,
            max_workers: 1,
            keep_alive: Duration::from_millis(50),
            queue_capacity: 1,
            shutdown_grace: Duration::from_secs(5),
        }));
        let publisher = InMemoryEventPublisher::new(Arc::clone(&pool));
        publisher.add_listener(EventKind::UserFollowed, Recording::new());

        let gate = Arc::new(Semaphore::new(0));
        let g = Arc::clone(&gate);
        pool.submit(async move {
            let _permit = g.acquire().await.unwrap();
        })
        .unwrap();
        timeout(Duration::from_secs(2), async {
            while pool.queued() != 0 {
                sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        publisher.publish(&follow_event()).unwrap(); // fills the queue
        let result = publisher.publish(&follow_event());
        assert!(matches!(result, Err(RippleError::DispatchRejected)));

        gate.add_permits(1);
        publisher.shutdown().await;
    }
}
