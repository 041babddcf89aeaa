// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The single background thread that drains a [`BlockingQueue`].
//!
//! A [`Dispatcher`] owns the join handle of exactly one named OS thread. The thread
//! loops on [`BlockingQueue::take`] and runs the callback for each item before taking
//! the next one, so callback invocations are strictly ordered and never overlap.
//!
//! Teardown always goes stop-then-join, either through [`Dispatcher::shutdown`] or
//! through `Drop`. Items still resident in the queue at that moment are discarded; an
//! item already taken finishes its callback first.

use crate::{BlockingQueue, DispatchStats, DispatcherConfig, PanicPolicy};
use herald_error::{HeraldError, Result};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Handle to a running dispatcher thread.
///
/// Dropping the handle stops the queue and joins the thread, so the thread never
/// outlives its owner.
///
/// # Example
///
/// ```
/// use herald_core::{BlockingQueue, Dispatcher, DispatcherConfig};
/// use std::sync::mpsc;
/// use std::sync::Arc;
///
/// let queue = Arc::new(BlockingQueue::new());
/// let (tx, rx) = mpsc::channel();
/// let mut dispatcher = Dispatcher::spawn(Arc::clone(&queue), &DispatcherConfig::new(), move |n: u32| {
///     tx.send(n * 2).unwrap();
/// })?;
///
/// queue.push(21);
/// assert_eq!(rx.recv().unwrap(), 42);
///
/// dispatcher.shutdown()?;
/// assert!(!dispatcher.is_running());
/// # Ok::<(), herald_error::HeraldError>(())
/// ```
pub struct Dispatcher<T> {
    name: String,
    queue: Arc<BlockingQueue<T>>,
    stats: Arc<DispatchStats>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Dispatcher<T> {
    /// Spawns the dispatcher thread for `queue`.
    ///
    /// `callback` runs on the dispatcher thread once per taken item.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::SpawnFailed`] if the OS refuses to create the thread.
    pub fn spawn<F>(
        queue: Arc<BlockingQueue<T>>,
        config: &DispatcherConfig,
        callback: F,
    ) -> Result<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        Self::spawn_with_stats(queue, config, Arc::default(), callback)
    }

    /// Like [`spawn`](Self::spawn), recording outcomes into counters owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::SpawnFailed`] if the OS refuses to create the thread.
    pub fn spawn_with_stats<F>(
        queue: Arc<BlockingQueue<T>>,
        config: &DispatcherConfig,
        stats: Arc<DispatchStats>,
        callback: F,
    ) -> Result<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        let name = config.thread_name().to_string();

        let worker = Worker {
            name: name.clone(),
            queue: Arc::clone(&queue),
            stats: Arc::clone(&stats),
            policy: config.panic_policy(),
        };

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || worker.run(callback))
            .map_err(|source| HeraldError::spawn_failed(&name, source))?;

        crate::debug!("dispatcher `{}` started", name);

        Ok(Self {
            name,
            queue,
            stats,
            handle: Some(handle),
        })
    }
}

impl<T> Dispatcher<T> {
    /// Name of the dispatcher thread.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delivery counters of this dispatcher.
    #[must_use]
    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    /// Returns `true` while the thread has neither been joined nor exited on its own.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the queue and joins the thread.
    ///
    /// Idempotent. Called from the dispatcher thread itself (a callback dropping the
    /// last owner of its own dispatcher) the queue is stopped but the join is skipped:
    /// the loop exits as soon as the callback returns.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::JoinFailed`] if the thread unwound instead of returning.
    pub fn shutdown(&mut self) -> Result<()> {
        self.queue.stop();

        let Some(handle) = self.handle.take() else {
            return Ok(());
        };

        if handle.thread().id() == thread::current().id() {
            crate::warn!(
                "dispatcher `{}` shut down from its own thread; join skipped",
                self.name
            );
            return Ok(());
        }

        handle
            .join()
            .map_err(|_| HeraldError::join_failed(&self.name))?;

        crate::debug!("dispatcher `{}` stopped", self.name);
        Ok(())
    }
}

impl<T> Drop for Dispatcher<T> {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            crate::error!("{}", err);
        }
    }
}

impl<T> fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name)
            .field("running", &self.is_running())
            .field("stats", &self.stats)
            .finish()
    }
}

// State moved onto the dispatcher thread.
struct Worker<T> {
    name: String,
    queue: Arc<BlockingQueue<T>>,
    stats: Arc<DispatchStats>,
    policy: PanicPolicy,
}

impl<T> Worker<T> {
    fn run<F: FnMut(T)>(self, mut callback: F) {
        while let Some(item) = self.queue.take() {
            match panic::catch_unwind(AssertUnwindSafe(|| callback(item))) {
                Ok(()) => self.stats.record_delivered(),
                Err(payload) => {
                    self.stats.record_failed();
                    let err = HeraldError::callback_panicked(&self.name, payload.as_ref());
                    crate::error!("{}", err);

                    if self.policy == PanicPolicy::Stop {
                        crate::warn!(
                            "dispatcher `{}` terminated; {} queued item(s) discarded",
                            self.name,
                            self.queue.size()
                        );
                        self.queue.stop();
                        return;
                    }
                }
            }
        }

        crate::trace!("dispatcher `{}` drained", self.name);
    }
}
