//! A small caller-owned worker pool.
//!
//! Jobs flow through one bounded crossbeam channel to a fixed set of named
//! worker threads. The pool never grows, never retries, and belongs entirely
//! to the caller: construct it, submit into it, shut it down (or let `Drop`
//! do so). [`guard`] layers the log-and-discard submission contract on top
//! of the typed surface here.

pub mod guard;

use std::thread;

use crossbeam_channel::{Sender, TrySendError, bounded};
use tracing::{debug, warn};

use crate::error::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

pub struct WorkerPool {
    job_tx: Option<Sender<Job>>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `num_workers` threads behind a queue holding at most
    /// `queue_depth` pending jobs. Both parameters must be nonzero.
    pub fn new(num_workers: usize, queue_depth: usize) -> Result<Self> {
        if num_workers == 0 {
            return Err(Error::Pool {
                reason: "cannot run with 0 workers".to_string(),
            });
        }
        if queue_depth == 0 {
            return Err(Error::Pool {
                reason: "queue depth must be > 0".to_string(),
            });
        }

        let (job_tx, job_rx) = bounded::<Job>(queue_depth);
        let mut workers = Vec::with_capacity(num_workers);

        for worker_id in 0..num_workers {
            let job_rx = job_rx.clone();
            let handle = thread::Builder::new()
                .name(format!("kitbag-worker-{worker_id}"))
                .spawn(move || {
                    for job in job_rx.iter() {
                        job();
                    }
                    debug!("Worker {} draining done, exiting", worker_id);
                })
                .map_err(|e| Error::Pool {
                    reason: format!("could not spawn worker thread {worker_id}: {e}"),
                })?;
            workers.push(handle);
        }

        Ok(Self {
            job_tx: Some(job_tx),
            workers,
        })
    }

    /// Queues `task` for execution.
    ///
    /// Never blocks: a full queue is [`Error::QueueFull`] and a shut-down
    /// pool is [`Error::PoolClosed`], both reported to the caller. See
    /// [`guard::submit`] for the variant that discards instead.
    pub fn submit<F>(&self, task: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(job_tx) = &self.job_tx else {
            return Err(Error::PoolClosed);
        };
        match job_tx.try_send(Box::new(task)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(Error::QueueFull),
            Err(TrySendError::Disconnected(_)) => Err(Error::PoolClosed),
        }
    }

    /// True once [`shutdown`](Self::shutdown) has run.
    pub fn is_shut_down(&self) -> bool {
        self.job_tx.is_none()
    }

    /// Closes the queue, lets the workers drain every accepted job, and
    /// joins them. Blocks without a timeout. A worker that died panicking is
    /// logged and otherwise ignored. Calling this twice is a no-op.
    pub fn shutdown(&mut self) {
        // Dropping the sender ends each worker's receive loop once the
        // queue is empty.
        self.job_tx.take();
        for worker in self.workers.drain(..) {
            let name = worker
                .thread()
                .name()
                .unwrap_or("kitbag-worker")
                .to_string();
            if worker.join().is_err() {
                warn!("Worker thread {} panicked before shutdown", name);
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
