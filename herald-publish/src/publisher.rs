// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The publisher a subject embeds by composition.
//!
//! [`Publisher`] forwards to the [`ChangeManager`] it owns. The manager type fixes the
//! delivery mode at construction:
//!
//! - [`SyncPublisher<S>`]: `notify(&S)` calls every subscriber before returning.
//! - [`AsyncPublisher<S>`]: `start()`, then `notify(Arc<S>)`, `notify_weak(&Arc<S>)` or
//!   `deliver(&S)` queue the notification for the dispatcher thread.
//!
//! Operations that only make sense in one mode exist only on that alias.
//!
//! ## Cloning
//!
//! Subscriptions are never copied: cloning a publisher (or a subject deriving `Clone`)
//! yields a publisher with an empty subscriber set. An async clone is not started and
//! inherits only the dispatcher configuration.

use crate::{AsyncChangeManager, ChangeManager, SharedSubscriber, Subscriber, SyncChangeManager};
use herald_core::{DispatchStats, DispatcherConfig};
use herald_error::Result;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Owns the change manager of subject `S`.
pub struct Publisher<S, M> {
    manager: M,
    _subject: PhantomData<fn(&S)>,
}

/// Publisher delivering on the notifying thread.
pub type SyncPublisher<S> = Publisher<S, SyncChangeManager<S>>;

/// Publisher delivering from a dispatcher thread.
pub type AsyncPublisher<S> = Publisher<S, AsyncChangeManager<S>>;

impl<S, M: ChangeManager<S>> Publisher<S, M> {
    /// Wraps an existing manager.
    #[must_use]
    pub const fn from_manager(manager: M) -> Self {
        Self {
            manager,
            _subject: PhantomData,
        }
    }

    /// Registers `subscriber`; attaching it twice delivers twice.
    pub fn attach(&self, subscriber: SharedSubscriber<S>) {
        self.manager.attach(subscriber);
    }

    /// Unregisters every attachment of `subscriber`.
    pub fn detach<T>(&self, subscriber: &Arc<T>)
    where
        T: Subscriber<S> + ?Sized,
    {
        self.manager.detach(subscriber);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.manager.subscriber_count()
    }

    #[must_use]
    pub const fn manager(&self) -> &M {
        &self.manager
    }
}

impl<S, M: ChangeManager<S> + Default> Publisher<S, M> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_manager(M::default())
    }
}

impl<S> SyncPublisher<S> {
    /// Calls every subscriber with `subject` before returning.
    pub fn notify(&self, subject: &S) {
        self.manager.notify(subject);
    }
}

impl<S> AsyncPublisher<S> {
    /// Unstarted publisher whose dispatcher will use `config`.
    #[must_use]
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self::from_manager(AsyncChangeManager::with_config(config))
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.manager.is_started()
    }

    /// Notifications not yet taken by the dispatcher.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.manager.pending()
    }

    #[must_use]
    pub fn stats(&self) -> &DispatchStats {
        self.manager.stats()
    }
}

impl<S: Send + Sync + 'static> AsyncPublisher<S> {
    /// Launches the dispatcher thread. Later calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::ShutDown`](herald_error::HeraldError::ShutDown) after a
    /// shutdown, or [`HeraldError::SpawnFailed`](herald_error::HeraldError::SpawnFailed)
    /// if the thread cannot be created.
    pub fn start(&self) -> Result<()> {
        self.manager.start()
    }

    /// Queues a notification carrying the shared, live `subject`.
    pub fn notify(&self, subject: Arc<S>) {
        self.manager.notify(subject);
    }

    /// Queues a notification that does not keep `subject` alive.
    pub fn notify_weak(&self, subject: &Arc<S>) {
        self.manager.notify_weak(subject);
    }

    /// Queues a notification carrying a clone of `subject`.
    pub fn deliver(&self, subject: &S)
    where
        S: Clone,
    {
        self.manager.deliver(subject);
    }
}

impl<S, M: ChangeManager<S> + Default> Default for Publisher<S, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, M: ChangeManager<S>> Clone for Publisher<S, M> {
    fn clone(&self) -> Self {
        Self::from_manager(self.manager.fresh())
    }
}

impl<S, M: fmt::Debug> fmt::Debug for Publisher<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("manager", &self.manager)
            .finish()
    }
}
