//! Small, independent helpers for everyday plumbing: whole-file reads and
//! writes with path probing, bounded random integers, retrying typed console
//! input, and a worker pool with an error-absorbing submission guard.
//!
//! Every fallible operation returns a typed [`Result`]; failures are also
//! reported through `tracing` so callers that just want the log trail get it
//! without installing any error handling of their own. The one deliberate
//! exception is [`pool::guard`], which exists to swallow scheduler errors.

pub mod console;
pub mod error;
pub mod io;
pub mod pool;
pub mod random;

pub use console::Prompter;
pub use error::{Error, Result};
pub use pool::WorkerPool;
