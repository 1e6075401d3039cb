//! Bounded worker pool for handler invocations.
//!
//! Design:
//! - A bounded FIFO queue of boxed jobs plus a fixed set of core workers.
//! - `submit` is synchronous and never blocks: queue has room -> push and
//!   notify; queue full -> bring up a spare worker (up to `max_workers`)
//!   seeded with the job; queue full and no spare slot -> fail right there.
//! - Spare workers exit after `keep_alive` without work; core workers live
//!   until shutdown.
//! - `shutdown` stops intake, waits up to `shutdown_grace` for queued and
//!   in-flight jobs to drain, then aborts whatever is left.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use serde::Deserialize;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;

use crate::domain::RippleError;

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Worker pool bounds. All of them are hard limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Workers alive for the pool's whole lifetime.
    pub core_workers: usize,

    /// Upper bound including spare workers brought up under load.
    pub max_workers: usize,

    /// Idle time after which a spare worker exits.
    pub keep_alive: Duration,

    /// Job queue capacity; submissions beyond it are rejected.
    pub queue_capacity: usize,

    /// How long `shutdown` waits before force-cancelling.
    pub shutdown_grace: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            core_workers: 2,
            max_workers: 4,
            keep_alive: Duration::from_secs(30),
            queue_capacity: 256,
            shutdown_grace: Duration::from_secs(10),
        }
    }
}

struct PoolShared {
    queue: Mutex<VecDeque<Job>>,
    notify: Notify,
    capacity: usize,
    keep_alive: Duration,
    shutting_down: AtomicBool,
    /// Remaining spare-worker slots (max_workers - core_workers, minus live spares).
    spare_slots: AtomicUsize,
}

/// Owned pool resource with an explicit start/drain/abort lifecycle.
pub struct WorkerPool {
    shared: Arc<PoolShared>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    joins: Mutex<Vec<JoinHandle<()>>>,
    grace: Duration,
}

impl WorkerPool {
    /// Spawn the core workers. Must be called inside a Tokio runtime.
    pub fn new(config: PoolConfig) -> Self {
        let shared = Arc::new(PoolShared {
            queue: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
            capacity: config.queue_capacity,
            keep_alive: config.keep_alive,
            shutting_down: AtomicBool::new(false),
            spare_slots: AtomicUsize::new(config.max_workers.saturating_sub(config.core_workers)),
        });

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut joins = Vec::with_capacity(config.core_workers);
        for _ in 0..config.core_workers {
            joins.push(tokio::spawn(worker_loop(
                Arc::clone(&shared),
                shutdown_rx.clone(),
            )));
        }

        Self {
            shared,
            shutdown_tx,
            shutdown_rx,
            joins: Mutex::new(joins),
            grace: config.shutdown_grace,
        }
    }

    /// Schedule one job. Synchronous: either the job is queued (or handed to
    /// a freshly spawned spare worker) and `Ok` comes back immediately, or
    /// the pool is saturated and the submission fails with
    /// [`RippleError::DispatchRejected`].
    pub fn submit<F>(&self, job: F) -> Result<(), RippleError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.shared.shutting_down.load(Ordering::SeqCst) {
            return Err(RippleError::DispatchRejected);
        }

        let job: Job = Box::pin(job);

        {
            let mut queue = self.shared.queue.lock();
            if queue.len() < self.shared.capacity {
                queue.push_back(job);
                drop(queue);
                self.shared.notify.notify_one();
                return Ok(());
            }
        }

        // キューが満杯。spare スロットが残っていればワーカーを増やす
        let acquired = self
            .shared
            .spare_slots
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |slots| {
                slots.checked_sub(1)
            })
            .is_ok();
        if !acquired {
            return Err(RippleError::DispatchRejected);
        }

        let join = tokio::spawn(spare_worker_loop(
            Arc::clone(&self.shared),
            self.shutdown_rx.clone(),
            job,
        ));
        self.joins.lock().push(join);
        Ok(())
    }

    /// Jobs currently queued (not yet picked up by a worker).
    pub fn queued(&self) -> usize {
        self.shared.queue.lock().len()
    }

    /// Stop intake, drain within the grace period, then force-cancel.
    pub async fn shutdown(&self) {
        self.shared.shutting_down.store(true, Ordering::SeqCst);
        let _ = self.shutdown_tx.send(true);
        self.shared.notify.notify_waiters();

        let joins = std::mem::take(&mut *self.joins.lock());
        let aborts: Vec<_> = joins.iter().map(|join| join.abort_handle()).collect();

        let drain = async move {
            for join in joins {
                let _ = join.await;
            }
        };
        if tokio::time::timeout(self.grace, drain).await.is_err() {
            // 猶予を越えた分は打ち切る
            for abort in aborts {
                abort.abort();
            }
        }
    }

    #[cfg(test)]
    fn spare_slots(&self) -> usize {
        self.shared.spare_slots.load(Ordering::SeqCst)
    }
}

async fn worker_loop(shared: Arc<PoolShared>, mut shutdown_rx: watch::Receiver<bool>) {
    loop {
        let job = shared.queue.lock().pop_front();
        if let Some(job) = job {
            job.await;
            continue;
        }

        // キューが空。shutdown が来ていたら抜ける
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = shared.notify.notified() => {}
        }
    }
}

/// Same loop as a core worker, but seeded with a first job and allowed to
/// retire after `keep_alive` of idleness. The spare slot is handed back on
/// exit.
async fn spare_worker_loop(
    shared: Arc<PoolShared>,
    mut shutdown_rx: watch::Receiver<bool>,
    first: Job,
) {
    first.await;

    loop {
        let job = shared.queue.lock().pop_front();
        if let Some(job) = job {
            job.await;
            continue;
        }

        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = shared.notify.notified() => {}
            _ = tokio::time::sleep(shared.keep_alive) => break,
        }
    }

    shared.spare_slots.fetch_add(1, Ordering::SeqCst);
}
