// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Thread-safe, append-only log of observed values.
#[derive(Debug)]
pub struct Recorder<T> {
    items: Mutex<Vec<T>>,
    changed: Condvar,
}

impl<T> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            changed: Condvar::new(),
        }
    }

    /// Appends `item` and wakes every waiter.
    pub fn record(&self, item: T) {
        self.items.lock().push(item);
        self.changed.notify_all();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Blocks until at least `len` items were recorded or `timeout` elapses.
    ///
    /// Returns `true` if the length was reached.
    pub fn wait_for_len(&self, len: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut items = self.items.lock();
        while items.len() < len {
            if self.changed.wait_until(&mut items, deadline).timed_out() {
                return items.len() >= len;
            }
        }
        true
    }
}

impl<T: Clone> Recorder<T> {
    /// Copy of everything recorded so far, in recording order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().clone()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
