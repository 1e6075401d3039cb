use thiserror::Error;

/// Errors raised by the feed core.
///
/// Validation variants are raised synchronously before anything is persisted
/// or published. `DispatchRejected` is synchronous to the `publish` caller.
/// `Handler` never escapes the worker pool; it is logged there and dropped.
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("{0} must not be empty")]
    EmptyId(&'static str),

    #[error("content must not be blank")]
    BlankContent,

    #[error("content must be at most 280 characters, got {0}")]
    ContentTooLong(usize),

    #[error("dispatch queue is full, invocation rejected")]
    DispatchRejected,

    #[error("handler failed: {0}")]
    Handler(String),
}
