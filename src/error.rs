use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong across the crate.
///
/// Filesystem variants carry the offending path so messages are useful
/// without the caller re-attaching context.
#[derive(Debug, Error)]
pub enum Error {
    /// The path does not name an existing filesystem entry.
    #[error("{}: no such file or directory", path.display())]
    NotFound { path: PathBuf },

    /// A file operation was asked of a directory.
    #[error("{}: is a directory", path.display())]
    IsADirectory { path: PathBuf },

    /// Any other filesystem failure (permissions, device errors, ...).
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the console streams themselves failed.
    #[error("console I/O failed: {source}")]
    Console {
        #[source]
        source: std::io::Error,
    },

    /// The input source reached EOF before a well-typed value was read.
    #[error("input closed before a valid value was entered")]
    InputClosed,

    /// The configured attempt limit was hit without a well-typed value.
    #[error("gave up after {attempts} malformed inputs")]
    RetriesExhausted { attempts: usize },

    /// The worker pool could not be brought up (bad parameters, spawn
    /// failure).
    #[error("worker pool: {reason}")]
    Pool { reason: String },

    /// The pool's bounded queue is at capacity.
    #[error("task rejected: worker queue is full")]
    QueueFull,

    /// The pool has been shut down and accepts no further tasks.
    #[error("task rejected: worker pool is shut down")]
    PoolClosed,
}
