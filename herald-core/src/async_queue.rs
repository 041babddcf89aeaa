// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered, asynchronous processing of stored items by a callback.
//!
//! [`AsyncQueue`] pairs a [`BlockingQueue`] with a [`Dispatcher`]: producers call
//! [`store`](AsyncQueue::store) from any thread and return immediately; the dispatcher
//! thread hands each item to the callback in insertion order, one at a time.
//!
//! ## Shutdown
//!
//! Dropping the queue (or calling [`shutdown`](AsyncQueue::shutdown)) stops the
//! dispatcher and joins it. Items that were stored but not yet taken are discarded.
//!
//! ## Example
//!
//! ```
//! use herald_core::AsyncQueue;
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! let queue = AsyncQueue::new(move |order: String| {
//!     tx.send(order.to_uppercase()).unwrap();
//! })?;
//!
//! queue.store("espresso".to_string());
//! queue.store("ristretto".to_string());
//!
//! assert_eq!(rx.recv().unwrap(), "ESPRESSO");
//! assert_eq!(rx.recv().unwrap(), "RISTRETTO");
//! # Ok::<(), herald_error::HeraldError>(())
//! ```

use crate::{BlockingQueue, DispatchStats, Dispatcher, DispatcherConfig};
use herald_error::Result;
use std::fmt;
use std::sync::Arc;

/// A queue whose items are consumed by a callback on a dedicated thread.
pub struct AsyncQueue<T> {
    queue: Arc<BlockingQueue<T>>,
    dispatcher: Dispatcher<T>,
}

impl<T: Send + 'static> AsyncQueue<T> {
    /// Creates the queue and starts its dispatcher with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::SpawnFailed`](herald_error::HeraldError::SpawnFailed) if
    /// the dispatcher thread cannot be created.
    pub fn new<F>(callback: F) -> Result<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        Self::with_config(&DispatcherConfig::default(), callback)
    }

    /// Creates the queue and starts its dispatcher with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::SpawnFailed`](herald_error::HeraldError::SpawnFailed) if
    /// the dispatcher thread cannot be created.
    pub fn with_config<F>(config: &DispatcherConfig, callback: F) -> Result<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        let queue = Arc::new(BlockingQueue::new());
        let dispatcher = Dispatcher::spawn(Arc::clone(&queue), config, callback)?;
        Ok(Self { queue, dispatcher })
    }
}

impl<T> AsyncQueue<T> {
    /// Enqueues `item` for processing and returns immediately.
    ///
    /// After shutdown the item is dropped.
    pub fn store(&self, item: T) {
        self.queue.push(item);
    }

    /// Number of stored items not yet taken by the dispatcher.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.size()
    }

    /// Delivery counters of the dispatcher.
    #[must_use]
    pub fn stats(&self) -> &DispatchStats {
        self.dispatcher.stats()
    }

    /// Returns `true` while the dispatcher thread is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.dispatcher.is_running()
    }

    /// Stops the dispatcher and waits for it to exit.
    ///
    /// The callback running at this moment (if any) completes; pending items are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::JoinFailed`](herald_error::HeraldError::JoinFailed) if the
    /// dispatcher thread unwound.
    pub fn shutdown(mut self) -> Result<()> {
        self.dispatcher.shutdown()
    }
}

impl<T> fmt::Debug for AsyncQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncQueue")
            .field("queue", &self.queue)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}
