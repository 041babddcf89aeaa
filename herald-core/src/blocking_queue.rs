// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unbounded FIFO queue with a blocking, atomic `take()` and a one-shot `stop()`.
//!
//! ## Characteristics
//!
//! - **Unbounded**: `push` never waits for space (no backpressure).
//! - **Atomic removal**: `take` is the only way to remove an item; waiting and removing
//!   happen under one lock acquisition, so two consumers can never observe the same head.
//! - **Stop is a signal, not an error**: after `stop()` every waiter wakes and `take`
//!   returns `None` forever.
//!
//! ## Example
//!
//! ```
//! use herald_core::BlockingQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(BlockingQueue::new());
//! let consumer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         let mut seen = Vec::new();
//!         while let Some(value) = queue.take() {
//!             seen.push(value);
//!             if seen.len() == 2 {
//!                 break;
//!             }
//!         }
//!         seen
//!     })
//! };
//!
//! queue.push(1);
//! queue.push(2);
//! assert_eq!(consumer.join().unwrap(), vec![1, 2]);
//!
//! queue.stop();
//! assert_eq!(queue.take(), None);
//! ```

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::fmt;

struct QueueState<T> {
    items: VecDeque<T>,
    stopped: bool,
}

/// A thread-safe, unbounded FIFO queue whose consumers block until data arrives.
///
/// Ownership of each item moves into the queue on [`push`](Self::push) and out again on
/// [`take`](Self::take); the queue never clones items.
pub struct BlockingQueue<T> {
    state: Mutex<QueueState<T>>,
    readable: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates an empty, running queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                stopped: false,
            }),
            readable: Condvar::new(),
        }
    }

    /// Appends `item` to the tail and wakes one waiting consumer.
    ///
    /// Never blocks beyond acquiring the internal lock. Pushing onto a stopped queue
    /// drops the item: nothing can take it anymore.
    pub fn push(&self, item: T) {
        let mut state = self.state.lock();
        if state.stopped {
            drop(state);
            crate::trace!("push on stopped queue: item discarded");
            return;
        }

        state.items.push_back(item);
        drop(state);
        self.readable.notify_one();
    }

    /// Removes and returns the head of the queue, blocking while it is empty.
    ///
    /// Returns `None` once the queue has been stopped, whether or not items remain.
    /// There is no timeout: the call waits until data arrives or [`stop`](Self::stop)
    /// is called.
    pub fn take(&self) -> Option<T> {
        let mut state = self.state.lock();
        loop {
            if state.stopped {
                return None;
            }

            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }

            self.readable.wait(&mut state);
        }
    }

    /// Number of items currently resident (snapshot).
    #[must_use]
    pub fn size(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Returns `true` if no item is resident (snapshot).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    /// Returns `true` once [`stop`](Self::stop) has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.state.lock().stopped
    }

    /// Stops the queue and wakes every blocked consumer.
    ///
    /// Resident items are dropped. Idempotent: later calls have no further effect.
    pub fn stop(&self) {
        let discarded = {
            let mut state = self.state.lock();
            if state.stopped {
                return;
            }
            state.stopped = true;
            std::mem::take(&mut state.items)
        };

        self.readable.notify_all();

        if !discarded.is_empty() {
            crate::debug!("queue stopped with {} undelivered item(s)", discarded.len());
        }
        // Items are dropped outside the lock: their destructors may touch other queues.
        drop(discarded);
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BlockingQueue")
            .field("size", &state.items.len())
            .field("stopped", &state.stopped)
            .finish()
    }
}
