//! Event publication port: the seam between event producers and the
//! handlers that react to them.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Event, EventKind, RippleError};

/// A handler for one kind of event.
///
/// Handlers take the whole [`Event`] and match on the variant they care
/// about; an event of another kind is a no-op for them. Invocations run on
/// the publisher's worker pool, so implementations must be `Send + Sync`.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &Event) -> Result<(), RippleError>;
}

/// Registry + scheduler for event handlers.
///
/// Design:
/// - `publish` is synchronous and fire-and-forget: it schedules one
///   independent invocation per registered handler and returns without
///   waiting for any of them to start or finish.
/// - No ordering is guaranteed between handlers for one event, nor between
///   invocations of successively published events.
pub trait EventPublisher: Send + Sync {
    /// Schedule all handlers registered for the event's kind.
    ///
    /// No registered handler is a logged no-op, not an error. A saturated
    /// worker queue fails the submission synchronously with
    /// [`RippleError::DispatchRejected`]; invocations already scheduled for
    /// this event stay scheduled.
    fn publish(&self, event: &Event) -> Result<(), RippleError>;

    /// Register a handler under an event kind. Handlers accumulate:
    /// registering the same handler twice runs it twice per event. Safe to
    /// call while `publish` is in progress on another thread.
    fn add_listener(&self, kind: EventKind, handler: Arc<dyn EventHandler>);
}
