// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Delivery on the notifying thread.
//!
//! [`SyncChangeManager::notify`] holds the subscriber lock for the whole fan-out, so a
//! subscriber detached before `notify` returns on another thread is never reached by a
//! later notification, and concurrent notifications are delivered one after the other.
//!
//! ## Reentrancy
//!
//! The lock is not reentrant: a subscriber must not attach, detach or notify on the same
//! manager from inside [`Subscriber::update`]. Doing so deadlocks.

use crate::{ChangeManager, SharedSubscriber, Subscriber, SubscriberSet};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Change manager that calls subscribers synchronously.
pub struct SyncChangeManager<S> {
    subscribers: Mutex<SubscriberSet<S>>,
}

impl<S> SyncChangeManager<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(SubscriberSet::new()),
        }
    }

    /// Calls `update(subject)` on every subscriber, in subscription order, before
    /// returning.
    pub fn notify(&self, subject: &S) {
        self.subscribers.lock().notify(subject);
    }
}

impl<S> ChangeManager<S> for SyncChangeManager<S> {
    fn attach(&self, subscriber: SharedSubscriber<S>) {
        self.subscribers.lock().attach(subscriber);
    }

    fn detach<T>(&self, subscriber: &Arc<T>)
    where
        T: Subscriber<S> + ?Sized,
    {
        self.subscribers.lock().detach(subscriber);
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    fn fresh(&self) -> Self {
        Self::new()
    }
}

impl<S> Default for SyncChangeManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for SyncChangeManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncChangeManager")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
