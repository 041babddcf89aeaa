// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Delivery from a dedicated dispatcher thread.
//!
//! An [`AsyncChangeManager`] queues each notification and returns immediately. One
//! dispatcher thread, launched lazily by [`start`](AsyncChangeManager::start), takes the
//! notifications in order and fans each one out to the subscribers attached at that
//! moment.
//!
//! ## Ownership per notification
//!
//! - [`notify`](AsyncChangeManager::notify) queues a shared `Arc<S>`: subscribers see the
//!   live subject, which stays alive until its notification has been delivered.
//! - [`deliver`](AsyncChangeManager::deliver) queues an owned clone, dropped by the
//!   dispatcher right after delivery.
//! - [`notify_weak`](AsyncChangeManager::notify_weak) queues a `Weak<S>`: the subject
//!   must outlive delivery, otherwise the notification is skipped. A subject notifying
//!   through its own embedded publisher uses this, so the queue never keeps its owner
//!   alive.
//!
//! Every queued notification carries its own ownership, so both calls can be freely
//! mixed on one manager.
//!
//! ## Lifecycle
//!
//! Notifications queued before `start()` wait in the queue and are delivered once it
//! runs. Dropping the manager stops the queue, discards what is still pending and joins
//! the dispatcher. A manager that has been shut down refuses to start again.

use crate::{ChangeManager, SharedSubscriber, Subscriber, SubscriberSet};
use herald_core::{BlockingQueue, DispatchStats, Dispatcher, DispatcherConfig};
use herald_error::{HeraldError, Result, ResultExt};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

enum Notification<S> {
    Shared(Arc<S>),
    Owned(S),
    Watched(Weak<S>),
}

fn fan_out<S>(subscribers: &Arc<Mutex<SubscriberSet<S>>>, subject: &S) {
    let snapshot = subscribers.lock().snapshot();
    for subscriber in &snapshot {
        subscriber.update(subject);
    }
}

/// Change manager that calls subscribers from its own dispatcher thread.
pub struct AsyncChangeManager<S> {
    subscribers: Arc<Mutex<SubscriberSet<S>>>,
    queue: Arc<BlockingQueue<Notification<S>>>,
    dispatcher: Mutex<Option<Dispatcher<Notification<S>>>>,
    stats: Arc<DispatchStats>,
    config: DispatcherConfig,
}

impl<S> AsyncChangeManager<S> {
    /// Unstarted manager with the default dispatcher configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    /// Unstarted manager whose dispatcher will use `config`.
    #[must_use]
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(SubscriberSet::new())),
            queue: Arc::new(BlockingQueue::new()),
            dispatcher: Mutex::new(None),
            stats: Arc::default(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Returns `true` from `start()` until `shutdown()`.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.dispatcher.lock().is_some()
    }

    /// Notifications queued and not yet taken by the dispatcher.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.size()
    }

    /// Delivery counters; all zero until started.
    #[must_use]
    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    /// Stops the dispatcher and joins it; pending notifications are discarded.
    ///
    /// Also happens on drop. The manager cannot be restarted afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::JoinFailed`](herald_error::HeraldError::JoinFailed) if the
    /// dispatcher thread unwound.
    pub fn shutdown(&mut self) -> Result<()> {
        self.queue.stop();
        match self.dispatcher.get_mut().take() {
            Some(mut dispatcher) => dispatcher.shutdown(),
            None => Ok(()),
        }
    }
}

impl<S: Send + Sync + 'static> AsyncChangeManager<S> {
    /// Launches the dispatcher thread. Later calls are no-ops.
    ///
    /// # Errors
    ///
    /// - [`HeraldError::ShutDown`] if the manager has been shut down.
    /// - [`HeraldError::SpawnFailed`] (with context) if the thread cannot be created;
    ///   `start` may then be retried.
    pub fn start(&self) -> Result<()> {
        let mut slot = self.dispatcher.lock();
        if slot.is_some() {
            return Ok(());
        }
        if self.queue.is_stopped() {
            return Err(HeraldError::shut_down(self.config.thread_name()));
        }

        let subscribers = Arc::clone(&self.subscribers);
        let dispatcher = Dispatcher::spawn_with_stats(
            Arc::clone(&self.queue),
            &self.config,
            Arc::clone(&self.stats),
            move |notification: Notification<S>| match notification {
                Notification::Shared(subject) => fan_out(&subscribers, subject.as_ref()),
                Notification::Owned(subject) => fan_out(&subscribers, &subject),
                Notification::Watched(subject) => match subject.upgrade() {
                    Some(subject) => fan_out(&subscribers, subject.as_ref()),
                    None => herald_core::trace!("subject dropped before delivery; skipped"),
                },
            },
        )
        .with_context(|| {
            format!(
                "starting change manager on `{}`",
                self.config.thread_name()
            )
        })?;

        *slot = Some(dispatcher);
        Ok(())
    }

    /// Queues a notification that hands subscribers the shared, live `subject`.
    pub fn notify(&self, subject: Arc<S>) {
        self.queue.push(Notification::Shared(subject));
    }

    /// Queues a notification that refers to `subject` without keeping it alive.
    ///
    /// The subject must outlive delivery; if it is gone by then, the notification is
    /// skipped.
    pub fn notify_weak(&self, subject: &Arc<S>) {
        self.queue.push(Notification::Watched(Arc::downgrade(subject)));
    }

    /// Queues a notification carrying a snapshot clone of `subject`.
    pub fn deliver(&self, subject: &S)
    where
        S: Clone,
    {
        self.queue.push(Notification::Owned(subject.clone()));
    }
}

impl<S> ChangeManager<S> for AsyncChangeManager<S> {
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
        Self::with_config(self.config.clone())
    }
}

impl<S> Default for AsyncChangeManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Drop for AsyncChangeManager<S> {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            herald_core::error!("{}", err);
        }
    }
}

impl<S> fmt::Debug for AsyncChangeManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncChangeManager")
            .field("subscribers", &self.subscriber_count())
            .field("pending", &self.pending())
            .field("started", &self.is_started())
            .field("config", &self.config)
            .finish()
    }
}
