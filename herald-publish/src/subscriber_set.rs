// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Subscriber;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a subscriber of `S`.
pub type SharedSubscriber<S> = Arc<dyn Subscriber<S>>;

/// Ordered collection of subscribers owned by one change manager.
///
/// Insertion order is delivery order. Attaching the same subscriber twice is allowed and
/// yields two deliveries per notification. Identity is the address of the shared
/// allocation, so any `Arc` clone of an attached subscriber detaches it.
pub struct SubscriberSet<S> {
    subscribers: Vec<SharedSubscriber<S>>,
}

impl<S> SubscriberSet<S> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Appends `subscriber` after every subscriber already present.
    pub fn attach(&mut self, subscriber: SharedSubscriber<S>) {
        self.subscribers.push(subscriber);
    }

    /// Removes every entry sharing `subscriber`'s allocation and returns how many went.
    pub fn detach<T>(&mut self, subscriber: &Arc<T>) -> usize
    where
        T: Subscriber<S> + ?Sized,
    {
        let target = Arc::as_ptr(subscriber).cast::<()>();
        let before = self.subscribers.len();
        self.subscribers
            .retain(|attached| Arc::as_ptr(attached).cast::<()>() != target);
        before - self.subscribers.len()
    }

    /// Returns `true` if `subscriber` is attached at least once.
    #[must_use]
    pub fn contains<T>(&self, subscriber: &Arc<T>) -> bool
    where
        T: Subscriber<S> + ?Sized,
    {
        let target = Arc::as_ptr(subscriber).cast::<()>();
        self.subscribers
            .iter()
            .any(|attached| Arc::as_ptr(attached).cast::<()>() == target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Copies the current membership so it can be iterated without holding a lock.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SharedSubscriber<S>> {
        self.subscribers.clone()
    }

    /// Calls [`Subscriber::update`] on every member, in order.
    pub fn notify(&self, subject: &S) {
        for subscriber in &self.subscribers {
            subscriber.update(subject);
        }
    }
}

impl<S> Default for SubscriberSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for SubscriberSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("len", &self.subscribers.len())
            .finish()
    }
}
