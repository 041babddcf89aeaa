// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subject-centric calling style.
//!
//! A type embedding a publisher implements [`Subject`] once; [`SyncSubject`] or
//! [`AsyncSubject`] then follow from the manager it picked.
//!
//! ```
//! use herald_publish::{Subject, SyncChangeManager, SyncPublisher, SyncSubject};
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Default)]
//! struct Thermostat {
//!     target: i32,
//!     publisher: SyncPublisher<Thermostat>,
//! }
//!
//! impl Subject for Thermostat {
//!     type Manager = SyncChangeManager<Self>;
//!
//!     fn publisher(&self) -> &SyncPublisher<Self> {
//!         &self.publisher
//!     }
//! }
//!
//! let seen = Arc::new(AtomicI32::new(0));
//! let display = {
//!     let seen = Arc::clone(&seen);
//!     Arc::new(move |t: &Thermostat| seen.store(t.target, Ordering::SeqCst))
//! };
//!
//! let thermostat = Thermostat { target: 21, ..Default::default() };
//! thermostat.attach(display);
//! thermostat.notify();
//!
//! assert_eq!(seen.load(Ordering::SeqCst), 21);
//! ```

use crate::{
    AsyncChangeManager, ChangeManager, Publisher, SharedSubscriber, Subscriber,
    SyncChangeManager,
};
use herald_error::Result;
use std::sync::Arc;

/// A type that owns a [`Publisher`] for itself.
pub trait Subject: Sized {
    /// Delivery mode: [`SyncChangeManager<Self>`] or [`AsyncChangeManager<Self>`].
    type Manager: ChangeManager<Self>;

    /// The embedded publisher.
    fn publisher(&self) -> &Publisher<Self, Self::Manager>;

    fn attach(&self, subscriber: SharedSubscriber<Self>) {
        self.publisher().attach(subscriber);
    }

    fn detach<T>(&self, subscriber: &Arc<T>)
    where
        T: Subscriber<Self> + ?Sized,
    {
        self.publisher().detach(subscriber);
    }

    fn subscriber_count(&self) -> usize {
        self.publisher().subscriber_count()
    }
}

/// Subjects that notify synchronously.
pub trait SyncSubject: Subject<Manager = SyncChangeManager<Self>> {
    /// Calls every subscriber with `self` before returning.
    fn notify(&self) {
        self.publisher().notify(self);
    }
}

impl<T: Subject<Manager = SyncChangeManager<T>>> SyncSubject for T {}

/// Subjects that notify from a dispatcher thread.
pub trait AsyncSubject: Subject<Manager = AsyncChangeManager<Self>> + Send + Sync + 'static {
    /// Launches the dispatcher. Later calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::ShutDown`](herald_error::HeraldError::ShutDown) after a
    /// shutdown, or [`HeraldError::SpawnFailed`](herald_error::HeraldError::SpawnFailed)
    /// if the thread cannot be created.
    fn start(&self) -> Result<()> {
        self.publisher().start()
    }

    /// Queues a notification that shares this very subject with the subscribers.
    ///
    /// The queue holds only a weak reference, since the subject owns the publisher.
    /// The caller keeps the subject alive until delivery; a notification whose subject
    /// is gone by then is skipped.
    fn notify(self: &Arc<Self>) {
        self.publisher().notify_weak(self);
    }

    /// Queues a notification carrying a snapshot clone of this subject.
    fn deliver(&self)
    where
        Self: Clone,
    {
        self.publisher().deliver(self);
    }
}

impl<T> AsyncSubject for T where
    T: Subject<Manager = AsyncChangeManager<T>> + Send + Sync + 'static
{
}
