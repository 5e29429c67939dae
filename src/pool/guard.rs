//! Log-and-discard adapters around pool and stream teardown.
//!
//! These helpers absorb scheduler and teardown errors instead of returning
//! them: a rejected task is logged and dropped, a panicked worker is logged
//! and ignored, a stream that fails to flush on close is logged and
//! released anyway. Callers that need to observe these failures should use
//! the typed [`WorkerPool`] surface directly.

use std::io::Write;

use tracing::warn;

use crate::error::Error;
use crate::pool::WorkerPool;

/// Forwards `task` to `pool`, discarding it on rejection.
///
/// A full queue or a shut-down pool produces a `warn!` and nothing else; the
/// task is dropped, never retried.
pub fn submit<F>(pool: &WorkerPool, task: F)
where
    F: FnOnce() + Send + 'static,
{
    match pool.submit(task) {
        Ok(()) => {}
        Err(Error::QueueFull) => warn!("Worker queue full, discarding task"),
        Err(_) => warn!("Worker pool shut down, discarding task"),
    }
}

/// Blocks until `pool` has drained every accepted task and its workers have
/// been joined. Worker panics are logged inside the pool and swallowed.
pub fn await_shutdown(pool: &mut WorkerPool) {
    pool.shutdown();
}

/// Flushes and releases a byte sink, swallowing any I/O failure.
pub fn close_stream<W: Write>(mut stream: W) {
    if let Err(e) = stream.flush() {
        warn!("Error closing stream: {}", e);
    }
}
